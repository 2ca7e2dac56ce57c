use crate::core::config::IgnoreSet;
use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/*
 * This module provides the directory traversal used by an export. It walks a
 * source folder depth-first, prunes directories whose name is in the ignore
 * set before descending into them, and returns the files to export in a
 * stable order. It defines errors specific to these operations, a trait
 * `FileSystemScannerOperations` for abstracting the traversal, and a concrete
 * implementation `CoreFileSystemScanner` built on `walkdir`.
 */

#[derive(Debug)]
pub enum FileSystemError {
    Io(io::Error),
    InvalidPath(PathBuf),
}

impl From<io::Error> for FileSystemError {
    fn from(err: io::Error) -> Self {
        FileSystemError::Io(err)
    }
}

impl std::fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileSystemError::Io(e) => write!(f, "I/O error: {e}"),
            FileSystemError::InvalidPath(p) => write!(f, "Not a directory: {p:?}"),
        }
    }
}

impl std::error::Error for FileSystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileSystemError::Io(e) => Some(e),
            FileSystemError::InvalidPath(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FileSystemError>;

pub trait FileSystemScannerOperations {
    /*
     * Walks `base_dir` recursively and returns every file beneath it that is
     * not inside a directory named in `ignore_set`. Each file appears exactly
     * once. Fails only if `base_dir` is not a directory; errors on individual
     * entries below it are logged and skipped.
     */
    fn collect_files(&self, base_dir: &Path, ignore_set: &IgnoreSet) -> Result<Vec<PathBuf>>;
}

/*
 * Walkdir-backed scanner. Links are not followed below the base directory:
 * a link to a directory is neither descended into nor exported, while a link
 * to a file (or a dangling link) is exported like a file. Within a directory,
 * files come before subdirectories and both are ordered by file name.
 */
pub struct CoreFileSystemScanner {}

impl CoreFileSystemScanner {
    pub fn new() -> Self {
        CoreFileSystemScanner {}
    }
}

impl Default for CoreFileSystemScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemScannerOperations for CoreFileSystemScanner {
    fn collect_files(&self, base_dir: &Path, ignore_set: &IgnoreSet) -> Result<Vec<PathBuf>> {
        if !base_dir.is_dir() {
            return Err(FileSystemError::InvalidPath(base_dir.to_path_buf()));
        }
        log::debug!("FileSystemScanner: Scanning {base_dir:?}, pruning {ignore_set:?}.");

        let walker = WalkDir::new(base_dir)
            .follow_links(false)
            .sort_by(files_first_then_name)
            .into_iter()
            .filter_entry(|entry| !is_pruned_dir(entry, ignore_set));

        let mut files = Vec::new();
        for entry_result in walker {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("FileSystemScanner: Skipping unreadable entry under {base_dir:?}: {e}");
                    continue;
                }
            };
            if is_exported_file(&entry) {
                files.push(entry.into_path());
            }
        }

        log::debug!(
            "FileSystemScanner: Scan of {base_dir:?} complete. Found {} files.",
            files.len()
        );
        Ok(files)
    }
}

fn files_first_then_name(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_is_dir = a.file_type().is_dir();
    let b_is_dir = b.file_type().is_dir();
    a_is_dir
        .cmp(&b_is_dir)
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_pruned_dir(entry: &DirEntry, ignore_set: &IgnoreSet) -> bool {
    let pruned =
        entry.depth() > 0 && entry.file_type().is_dir() && ignore_set.contains(entry.file_name());
    if pruned {
        log::trace!("FileSystemScanner: Pruning ignored directory {:?}", entry.path());
    }
    pruned
}

fn is_exported_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        // `Path::is_dir` follows the link; dangling links report false and are kept.
        return !entry.path().is_dir();
    }
    true
}
