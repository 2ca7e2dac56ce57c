// src/main.rs

mod core;

use crate::core::{
    CoreExporter, ExportError, ExportSummary, ExporterOperations, ProjectContext, path_utils,
    timestamp,
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, Write};
use std::process::ExitCode;

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    // Logging is diagnostic only; an export still runs without it.
    if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Logger unavailable: {e}");
    }
}

fn run() -> Result<ExportSummary, ExportError> {
    let exporter = CoreExporter::default();

    let root = path_utils::resolve_executable_root()?;
    let context = ProjectContext::new(root);
    log::debug!("Main: Repository root is {:?}", context.root_path());
    if context.resolve_candidate_dirs(exporter.config()).is_empty() {
        return Err(ExportError::NoSourceDirectories);
    }

    let output_dir =
        path_utils::get_desktop_dir(exporter.config()).ok_or(ExportError::NoHomeDirectory)?;
    let stamp = timestamp::capture_export_timestamp()?;

    exporter.export(&context, &output_dir, &stamp)
}

/*
 * Writes the one-line console outcome of a run and returns whether it
 * succeeded. Both the success message and the missing-source diagnostic go
 * to `stdout`; only the exit status tells them apart. Any other failure is
 * reported on `stderr`.
 */
fn report(
    result: &Result<ExportSummary, ExportError>,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> io::Result<bool> {
    match result {
        Ok(summary) => {
            writeln!(
                stdout,
                "Exportação concluída! Arquivo gerado em: {}",
                summary.output_path.display()
            )?;
            Ok(true)
        }
        Err(e @ ExportError::NoSourceDirectories) => {
            writeln!(stdout, "{e}")?;
            Ok(false)
        }
        Err(e) => {
            writeln!(stderr, "Erro: {e}")?;
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let result = run();
    match report(&result, &mut io::stdout(), &mut io::stderr()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("Main: Failed to write console output: {e}");
            if result.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report_to_strings(
        result: &Result<ExportSummary, ExportError>,
    ) -> io::Result<(bool, String, String)> {
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let succeeded = report(result, &mut out, &mut err)?;
        Ok((
            succeeded,
            String::from_utf8(out).expect("stdout is UTF-8"),
            String::from_utf8(err).expect("stderr is UTF-8"),
        ))
    }

    #[test]
    fn test_report_success_on_stdout() -> io::Result<()> {
        let summary = ExportSummary {
            output_path: PathBuf::from("/home/u/Desktop/repo_20240101_120000.txt"),
            directories_scanned: 1,
            entries_written: 3,
            read_failures: 0,
        };

        let (succeeded, out, err) = report_to_strings(&Ok(summary))?;

        assert!(succeeded);
        assert_eq!(
            out,
            "Exportação concluída! Arquivo gerado em: /home/u/Desktop/repo_20240101_120000.txt\n"
        );
        assert!(err.is_empty());
        Ok(())
    }

    #[test]
    fn test_report_missing_sources_on_stdout_as_failure() -> io::Result<()> {
        let (succeeded, out, err) = report_to_strings(&Err(ExportError::NoSourceDirectories))?;

        assert!(!succeeded);
        assert_eq!(
            out,
            "Nenhum diretório 'app/src' ou 'src' encontrado no repositório.\n"
        );
        assert!(err.is_empty());
        Ok(())
    }

    #[test]
    fn test_report_other_errors_on_stderr() -> io::Result<()> {
        let (succeeded, out, err) = report_to_strings(&Err(ExportError::NoHomeDirectory))?;

        assert!(!succeeded);
        assert!(out.is_empty());
        assert!(err.starts_with("Erro: "));
        Ok(())
    }
}
