/*
 * This module consolidates the platform-agnostic logic of the exporter. It
 * re-exports the key data structures and the abstractions
 * (`FileSystemScannerOperations`, `ArchiverOperations`, `ExporterOperations`)
 * used to walk a repository's source folders and concatenate their files
 * into a single text export, plus the path and timestamp helpers that name
 * the output file.
 */
pub mod archiver;
pub mod config;
pub mod exporter;
pub mod file_system;
pub mod path_utils;
pub mod project_context;
pub mod timestamp;

pub use project_context::ProjectContext;

pub use exporter::{CoreExporter, ExportError, ExportSummary, ExporterOperations};
