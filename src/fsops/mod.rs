//! Collaborator file operations invoked by page callbacks: organize, rename,
//! delete, duplicate grouping, storage usage.

pub mod delete;
pub mod duplicates;
pub mod organize;
pub mod rename;
pub mod storage;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// List the plain files directly inside `dir`, sorted by file name.
///
/// Directories, symlinks-to-directories and unreadable entries are skipped.
/// Shared by every operation that works one `read_dir` level deep.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Append `_1`, `_2`, … to the stem until the path does not exist.
pub fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let parent = path.parent().unwrap_or(Path::new(""));

    let mut counter = 1;
    loop {
        let candidate = parent.join(format!("{stem}_{counter}{ext}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
