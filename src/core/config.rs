/*
 * Holds the fixed settings of an export run: which source folders are
 * candidates, which directory names are never descended into, and where the
 * output file is placed relative to the user's home directory. Nothing here
 * is read from disk or the environment; `ExportConfig::default()` yields the
 * only configuration the binary uses, and tests build variants of it.
 */
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Relative source folders checked under the repository root, in check order.
pub const CANDIDATE_SOURCE_DIRS: [&[&str]; 2] = [&["app", "src"], &["src"]];

/// Directory names pruned at every level of the traversal.
pub const IGNORED_DIR_NAMES: [&str; 4] = ["node_modules", ".vscode", ".next", "nextjs"];

/// Folder under the home directory that receives the output file.
pub const OUTPUT_FOLDER_NAME: &str = "Desktop";

pub const OUTPUT_FILE_EXTENSION: &str = "txt";

/// Label in each entry header: `\n=== <label>: <relative path> ===\n`.
pub const ENTRY_HEADER_LABEL: &str = "Arquivo";

/// Label of the line written in place of unreadable content: `[<label>: <detail>]\n`.
pub const READ_ERROR_LABEL: &str = "Erro ao ler arquivo";

/*
 * A set of directory names (not paths). Matching is by exact, case-sensitive
 * file name comparison, so `node_modules` prunes `src/a/node_modules` but not
 * `src/node_modules_old`.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IgnoreSet {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.names.contains(n))
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        IgnoreSet::new(IGNORED_DIR_NAMES)
    }
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub candidate_source_dirs: Vec<PathBuf>,
    pub ignore_set: IgnoreSet,
    pub output_folder_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            candidate_source_dirs: CANDIDATE_SOURCE_DIRS
                .iter()
                .map(|parts| parts.iter().collect::<PathBuf>())
                .collect(),
            ignore_set: IgnoreSet::default(),
            output_folder_name: OUTPUT_FOLDER_NAME.to_string(),
        }
    }
}
