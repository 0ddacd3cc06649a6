//! Batch renaming: prefix + zero-padded sequence number, extension preserved.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fsops::list_files;

/// User-chosen renaming scheme.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub prefix: String,
    /// First sequence number.
    pub start: usize,
    /// Minimum digit count; shorter numbers are zero-padded.
    pub pad: usize,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            prefix: "file_".to_string(),
            start: 1,
            pad: 3,
        }
    }
}

/// Outcome of one rename pass.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: usize,
    pub skipped: usize,
}

/// Build the `(old, new)` rename pairs for the top-level files of `dir`,
/// in file-name order. Files whose new name equals the old one are omitted.
pub fn plan(dir: &Path, opts: &RenameOptions) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut pairs = Vec::new();
    for (i, src) in list_files(dir)?.into_iter().enumerate() {
        let ext = src
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let new_name = format!(
            "{}{:0width$}{}",
            opts.prefix,
            opts.start + i,
            ext,
            width = opts.pad
        );
        let dest = src.parent().unwrap_or(Path::new("")).join(new_name);
        if dest != src {
            pairs.push((src, dest));
        }
    }
    Ok(pairs)
}

/// Apply a rename plan. A pair whose target already exists is skipped so an
/// overlapping plan can never overwrite a file.
pub fn apply(plan: &[(PathBuf, PathBuf)]) -> RenameReport {
    let mut report = RenameReport::default();
    for (src, dest) in plan {
        if dest.exists() {
            log::warn!("rename: target {} already exists, skipping", dest.display());
            report.skipped += 1;
            continue;
        }
        match std::fs::rename(src, dest) {
            Ok(()) => report.renamed += 1,
            Err(e) => {
                log::warn!("rename: {} -> {}: {e}", src.display(), dest.display());
                report.skipped += 1;
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(prefix: &str, start: usize, pad: usize) -> RenameOptions {
        RenameOptions {
            prefix: prefix.to_string(),
            start,
            pad,
        }
    }

    #[test]
    fn plan_is_ordered_padded_and_keeps_extensions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("zebra.png"), "z").unwrap();
        std::fs::write(dir.path().join("apple.txt"), "a").unwrap();

        let pairs = plan(dir.path(), &opts("trip_", 1, 3)).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].1, dir.path().join("trip_001.txt"));
        assert_eq!(pairs[1].1, dir.path().join("trip_002.png"));
    }

    #[test]
    fn plan_omits_files_already_named_correctly() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pic_01.jpg"), "x").unwrap();

        let pairs = plan(dir.path(), &opts("pic_", 1, 2)).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn apply_skips_existing_targets() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let taken = dir.path().join("taken.txt");
        std::fs::write(&src, "a").unwrap();
        std::fs::write(&taken, "taken").unwrap();

        let report = apply(&[(src.clone(), taken.clone())]);
        assert_eq!(report.renamed, 0);
        assert_eq!(report.skipped, 1);
        assert!(src.exists());
        assert_eq!(std::fs::read_to_string(&taken).unwrap(), "taken");
    }

    #[test]
    fn sequence_continues_across_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }

        let pairs = plan(dir.path(), &opts("img_", 10, 2)).unwrap();
        let report = apply(&pairs);
        assert_eq!(report.renamed, 3);
        assert!(dir.path().join("img_10.jpg").is_file());
        assert!(dir.path().join("img_11.jpg").is_file());
        assert!(dir.path().join("img_12.jpg").is_file());
    }
}
