//! Deletion: list files matching an extension filter, then trash or remove.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fsops::list_files;

/// Top-level files of `dir` whose extension matches `ext_filter`
/// (case-insensitive, leading dot optional). An empty filter matches all.
pub fn list_matching(dir: &Path, ext_filter: &str) -> Result<Vec<PathBuf>> {
    let wanted = ext_filter.trim().trim_start_matches('.').to_lowercase();
    Ok(list_files(dir)?
        .into_iter()
        .filter(|p| {
            if wanted.is_empty() {
                return true;
            }
            p.extension()
                .map(|e| e.to_string_lossy().to_lowercase() == wanted)
                .unwrap_or(false)
        })
        .collect())
}

/// Outcome of one delete pass.
#[derive(Debug, Default)]
pub struct DeleteReport {
    pub deleted: usize,
    pub failed: usize,
}

/// Delete the given files, to the system trash when `to_trash` is set,
/// permanently otherwise. Per-file failures are counted and logged; the pass
/// continues with the rest.
pub fn delete_files(paths: &[PathBuf], to_trash: bool) -> DeleteReport {
    let mut report = DeleteReport::default();
    for path in paths {
        let outcome = if to_trash {
            trash::delete(path).map_err(|e| e.to_string())
        } else {
            std::fs::remove_file(path).map_err(|e| e.to_string())
        };
        match outcome {
            Ok(()) => report.deleted += 1,
            Err(e) => {
                log::warn!("delete: {}: {e}", path.display());
                report.failed += 1;
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_matches_case_insensitively_with_optional_dot() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.TMP"), "x").unwrap();
        std::fs::write(dir.path().join("b.tmp"), "x").unwrap();
        std::fs::write(dir.path().join("c.txt"), "x").unwrap();

        for filter in ["tmp", ".tmp", "TMP"] {
            let hits = list_matching(dir.path(), filter).unwrap();
            assert_eq!(hits.len(), 2, "filter {filter:?}");
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.log"), "x").unwrap();
        std::fs::write(dir.path().join("noext"), "x").unwrap();

        let hits = list_matching(dir.path(), "").unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn permanent_delete_removes_files_and_counts_failures() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("a.log");
        std::fs::write(&real, "x").unwrap();
        let ghost = dir.path().join("missing.log");

        let report = delete_files(&[real.clone(), ghost], false);
        assert_eq!(report.deleted, 1);
        assert_eq!(report.failed, 1);
        assert!(!real.exists());
    }
}
