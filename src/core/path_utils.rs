/*
 * This module provides utility functions for locating the directories an
 * export run depends on: the repository root (the folder holding the
 * executable, never the working directory) and the output folder under the
 * user's home directory. It also builds the output file name.
 */
use crate::core::config::{ExportConfig, OUTPUT_FILE_EXTENSION};
use directories::UserDirs;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

/*
 * Resolves the absolute directory containing the running executable.
 * Symlinks are resolved so that a binary launched through a link still
 * exports the repository it physically lives in.
 *
 * Returns:
 *   The canonical parent directory of the executable, or an `io::Error` if
 *   the executable path cannot be determined or has no parent.
 */
pub fn resolve_executable_root() -> io::Result<PathBuf> {
    let exe_path = env::current_exe()?;
    let exe_path = exe_path.canonicalize()?;
    log::trace!("PathUtils: Executable resolved to {exe_path:?}");
    exe_path.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable path {exe_path:?} has no parent directory"),
        )
    })
}

/*
 * Returns `<home>/<output folder>` (the Desktop by default). The folder is
 * neither checked nor created here; if it is missing, opening the output file
 * fails later and that failure is fatal.
 *
 * Returns `None` only if the home directory cannot be determined.
 */
pub fn get_desktop_dir(config: &ExportConfig) -> Option<PathBuf> {
    let dirs = UserDirs::new()?;
    let desktop = dirs.home_dir().join(&config.output_folder_name);
    log::trace!("PathUtils: Output folder resolved to {desktop:?}");
    Some(desktop)
}

/// Builds `<output_dir>/<repo_name>_<timestamp>.txt`.
pub fn output_file_path(output_dir: &Path, repo_name: &str, timestamp: &str) -> PathBuf {
    output_dir.join(format!("{repo_name}_{timestamp}.{OUTPUT_FILE_EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_path_format() {
        let path = output_file_path(Path::new("/home/u/Desktop"), "my-repo", "20240131_235959");
        assert_eq!(
            path,
            Path::new("/home/u/Desktop").join("my-repo_20240131_235959.txt")
        );
    }

    #[test]
    fn test_resolve_executable_root_is_parent_of_current_exe() {
        let root = resolve_executable_root().expect("executable root should resolve");
        assert!(root.is_absolute());
        assert!(root.is_dir());
        let exe = env::current_exe().unwrap().canonicalize().unwrap();
        assert_eq!(exe.parent(), Some(root.as_path()));
    }

    #[test]
    fn test_get_desktop_dir_is_under_home() {
        // UserDirs depends on the environment; only check the shape when a home exists.
        let config = ExportConfig::default();
        if let Some(desktop) = get_desktop_dir(&config) {
            assert!(desktop.ends_with("Desktop"));
            let home = UserDirs::new().unwrap().home_dir().to_path_buf();
            assert_eq!(desktop.parent(), Some(home.as_path()));
        }
    }
}
