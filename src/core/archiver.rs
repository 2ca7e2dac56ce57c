/*
 * Writes the entries of an export. Each file becomes a header naming its
 * path relative to the project root, followed by its text content, or by a
 * one-line error marker when the file cannot be read as text. It defines the
 * `ArchiverOperations` trait and its concrete implementation `CoreArchiver`.
 */
use super::config::{ENTRY_HEADER_LABEL, READ_ERROR_LABEL};
use super::project_context::ProjectContext;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Result of appending one file to the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The file was read as text and its content written verbatim.
    Content,
    /// The file could not be read; an inline error marker was written instead.
    ReadFailed,
}

pub trait ArchiverOperations {
    /*
     * Appends one entry for `file_path` to `out`: a header naming the file
     * relative to the project root, then the file's text or an error marker.
     * A failure to read the file is recorded in the output and reported as
     * `EntryOutcome::ReadFailed`. Only failures to write to `out` are
     * returned as errors.
     */
    fn append_entry(
        &self,
        out: &mut dyn Write,
        context: &ProjectContext,
        file_path: &Path,
    ) -> io::Result<EntryOutcome>;
}

pub struct CoreArchiver {}

impl CoreArchiver {
    pub fn new() -> Self {
        CoreArchiver {}
    }
}

impl Default for CoreArchiver {
    fn default() -> Self {
        Self::new()
    }
}

/// `\n=== Arquivo: <path> ===\n`
pub fn format_entry_header(display_path: &str) -> String {
    format!("\n=== {ENTRY_HEADER_LABEL}: {display_path} ===\n")
}

/// `[Erro ao ler arquivo: <detail>]\n`
pub fn format_read_error(err: &io::Error) -> String {
    format!("[{READ_ERROR_LABEL}: {err}]\n")
}

impl ArchiverOperations for CoreArchiver {
    fn append_entry(
        &self,
        out: &mut dyn Write,
        context: &ProjectContext,
        file_path: &Path,
    ) -> io::Result<EntryOutcome> {
        let display_path = context.relative_display_path(file_path);
        out.write_all(format_entry_header(&display_path).as_bytes())?;

        // The whole file is read before anything is written, so a file that
        // fails halfway leaves only the marker behind its header.
        match fs::read_to_string(file_path) {
            Ok(content) => {
                out.write_all(content.as_bytes())?;
                log::trace!("CoreArchiver: Appended {display_path} ({} bytes)", content.len());
                Ok(EntryOutcome::Content)
            }
            Err(e) => {
                log::warn!("CoreArchiver: Failed to read {file_path:?}: {e}");
                out.write_all(format_read_error(&e).as_bytes())?;
                Ok(EntryOutcome::ReadFailed)
            }
        }
    }
}
