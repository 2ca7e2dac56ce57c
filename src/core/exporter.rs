/*
 * Orchestrates one export run. Given the project root, the output folder and
 * a pre-captured timestamp, it resolves the candidate source folders, opens
 * the output file, and appends one entry per file found by the scanner, in
 * scan order. Errors are split in two tiers: anything that prevents producing
 * the output file is returned as `ExportError`; a file that cannot be read is
 * recorded inline by the archiver and the run continues.
 */
use super::archiver::{ArchiverOperations, CoreArchiver, EntryOutcome};
use super::config::ExportConfig;
use super::file_system::{CoreFileSystemScanner, FileSystemScannerOperations};
use super::path_utils;
use super::project_context::ProjectContext;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ExportError {
    /// None of the candidate source folders exists under the root.
    NoSourceDirectories,
    NoHomeDirectory,
    Timestamp(time::error::Format),
    Io(io::Error),
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl From<time::error::Format> for ExportError {
    fn from(err: time::error::Format) -> Self {
        ExportError::Timestamp(err)
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::NoSourceDirectories => {
                write!(f, "Nenhum diretório 'app/src' ou 'src' encontrado no repositório.")
            }
            ExportError::NoHomeDirectory => {
                write!(f, "Não foi possível determinar o diretório home do usuário.")
            }
            ExportError::Timestamp(e) => write!(f, "Falha ao formatar o horário da exportação: {e}"),
            ExportError::Io(e) => write!(f, "Erro de E/S: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Timestamp(e) => Some(e),
            ExportError::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub directories_scanned: usize,
    pub entries_written: usize,
    pub read_failures: usize,
}

pub trait ExporterOperations {
    fn export(
        &self,
        context: &ProjectContext,
        output_dir: &Path,
        timestamp: &str,
    ) -> Result<ExportSummary>;
}

pub struct CoreExporter {
    config: ExportConfig,
    scanner: Box<dyn FileSystemScannerOperations>,
    archiver: Box<dyn ArchiverOperations>,
}

impl CoreExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self::with_components(
            config,
            Box::new(CoreFileSystemScanner::new()),
            Box::new(CoreArchiver::new()),
        )
    }

    pub fn with_components(
        config: ExportConfig,
        scanner: Box<dyn FileSystemScannerOperations>,
        archiver: Box<dyn ArchiverOperations>,
    ) -> Self {
        CoreExporter {
            config,
            scanner,
            archiver,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }
}

impl Default for CoreExporter {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}

impl ExporterOperations for CoreExporter {
    fn export(
        &self,
        context: &ProjectContext,
        output_dir: &Path,
        timestamp: &str,
    ) -> Result<ExportSummary> {
        let candidates = context.resolve_candidate_dirs(&self.config);
        if candidates.is_empty() {
            log::error!(
                "CoreExporter: No candidate source directory under {:?}",
                context.root_path()
            );
            return Err(ExportError::NoSourceDirectories);
        }

        let output_path =
            path_utils::output_file_path(output_dir, &context.display_name(), timestamp);
        log::info!("CoreExporter: Exporting {} folder(s) to {output_path:?}", candidates.len());

        let mut out = BufWriter::new(File::create(&output_path)?);
        let mut summary = ExportSummary {
            output_path,
            directories_scanned: 0,
            entries_written: 0,
            read_failures: 0,
        };

        for base_dir in &candidates {
            let files = match self.scanner.collect_files(base_dir, &self.config.ignore_set) {
                Ok(files) => files,
                Err(e) => {
                    log::warn!("CoreExporter: Skipping {base_dir:?}: {e}");
                    continue;
                }
            };
            summary.directories_scanned += 1;

            for file_path in &files {
                if self.archiver.append_entry(&mut out, context, file_path)?
                    == EntryOutcome::ReadFailed
                {
                    summary.read_failures += 1;
                }
                summary.entries_written += 1;
            }
        }

        out.flush()?;
        log::info!(
            "CoreExporter: Wrote {} entries ({} unreadable) from {} folder(s).",
            summary.entries_written,
            summary.read_failures,
            summary.directories_scanned
        );
        Ok(summary)
    }
}
