/*
 * Domain object representing the repository being exported. It wraps the
 * root path, which is resolved once at startup and never changes during a
 * run, and exposes the semantic lookups the exporter needs: the repository
 * display name, the candidate source folders that actually exist, and the
 * root-relative form of a file path used in entry headers.
 */
use crate::core::config::ExportConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ProjectContext {
    root: PathBuf,
}

impl ProjectContext {
    pub fn new(root: PathBuf) -> Self {
        ProjectContext { root }
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// Base name of the root folder, or the full root when it has none (e.g. `/`).
    pub fn display_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.to_string_lossy().into_owned())
    }

    /*
     * Returns the configured candidate source folders that exist as
     * directories right now, preserving the configured check order. An empty
     * result means there is nothing to export.
     */
    pub fn resolve_candidate_dirs(&self, config: &ExportConfig) -> Vec<PathBuf> {
        config
            .candidate_source_dirs
            .iter()
            .map(|relative| self.root.join(relative))
            .filter(|candidate| {
                let exists = candidate.is_dir();
                log::debug!("ProjectContext: Candidate {candidate:?} exists: {exists}");
                exists
            })
            .collect()
    }

    /*
     * Path of `path` relative to the root, as shown in entry headers. Falls
     * back to the full path if `path` is not under the root.
     */
    pub fn relative_display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}
