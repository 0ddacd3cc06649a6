//! Organize a directory: move each top-level file into a category subfolder
//! named after its extension family.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fsops::{list_files, unique_path};

/// Category folder name for a file extension (already lower-cased by the
/// caller or matched case-insensitively via [`category_for_path`]).
pub fn category_for(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" | "svg" | "ico" | "tiff" | "heic" => {
            "Images"
        }
        "pdf" | "doc" | "docx" | "txt" | "md" | "odt" | "rtf" | "xls" | "xlsx" | "ppt" | "pptx"
        | "csv" => "Documents",
        "mp4" | "mkv" | "avi" | "mov" | "wmv" | "flv" | "webm" => "Videos",
        "mp3" | "wav" | "flac" | "ogg" | "m4a" | "aac" => "Music",
        "zip" | "rar" | "7z" | "tar" | "gz" | "bz2" | "xz" => "Archives",
        "exe" | "msi" | "deb" | "rpm" | "appimage" | "dmg" | "apk" => "Programs",
        _ => "Other",
    }
}

/// Category for a concrete path; extension-less files land in `Other`.
pub fn category_for_path(path: &Path) -> &'static str {
    match path.extension() {
        Some(ext) => category_for(&ext.to_string_lossy().to_lowercase()),
        None => "Other",
    }
}

/// Outcome of one organize pass.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    pub moved: usize,
    pub failed: usize,
    /// Category folders that received at least one file.
    pub categories: BTreeSet<&'static str>,
}

/// Pair each top-level file with its destination category, in name order.
pub fn plan_moves(dir: &Path) -> Result<Vec<(PathBuf, &'static str)>> {
    Ok(list_files(dir)?
        .into_iter()
        .map(|p| {
            let cat = category_for_path(&p);
            (p, cat)
        })
        .collect())
}

/// Move every top-level file of `dir` into its category subfolder.
///
/// Name collisions inside a category folder are resolved with a numeric
/// suffix. A file that fails to move is counted and logged, and the pass
/// continues with the rest.
pub fn organize_dir(dir: &Path) -> Result<OrganizeReport> {
    let mut report = OrganizeReport::default();

    for (src, category) in plan_moves(dir)? {
        let target_dir = dir.join(category);
        if let Err(e) = std::fs::create_dir_all(&target_dir) {
            log::warn!("organize: cannot create {}: {e}", target_dir.display());
            report.failed += 1;
            continue;
        }

        let file_name = match src.file_name() {
            Some(n) => n.to_owned(),
            None => continue,
        };
        let dest = unique_path(&target_dir.join(file_name));
        match std::fs::rename(&src, &dest) {
            Ok(()) => {
                report.moved += 1;
                report.categories.insert(category);
            }
            Err(e) => {
                log::warn!("organize: {} -> {}: {e}", src.display(), dest.display());
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_by_extension() {
        assert_eq!(category_for("jpg"), "Images");
        assert_eq!(category_for("pdf"), "Documents");
        assert_eq!(category_for("mkv"), "Videos");
        assert_eq!(category_for("flac"), "Music");
        assert_eq!(category_for("7z"), "Archives");
        assert_eq!(category_for("exe"), "Programs");
        assert_eq!(category_for("xyz"), "Other");
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert_eq!(category_for_path(Path::new("/tmp/PHOTO.JPG")), "Images");
        assert_eq!(category_for_path(Path::new("/tmp/noext")), "Other");
    }

    #[test]
    fn organize_moves_files_into_category_folders() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpg"), "img").unwrap();
        std::fs::write(dir.path().join("b.pdf"), "doc").unwrap();
        std::fs::write(dir.path().join("c"), "??").unwrap();

        let report = organize_dir(dir.path()).unwrap();
        assert_eq!(report.moved, 3);
        assert_eq!(report.failed, 0);
        assert!(report.categories.contains("Images"));
        assert!(report.categories.contains("Documents"));
        assert!(report.categories.contains("Other"));

        assert!(dir.path().join("Images/a.jpg").is_file());
        assert!(dir.path().join("Documents/b.pdf").is_file());
        assert!(dir.path().join("Other/c").is_file());
        assert!(!dir.path().join("a.jpg").exists());
    }

    #[test]
    fn organize_resolves_collisions_with_suffix() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Images")).unwrap();
        std::fs::write(dir.path().join("Images/a.jpg"), "old").unwrap();
        std::fs::write(dir.path().join("a.jpg"), "new").unwrap();

        let report = organize_dir(dir.path()).unwrap();
        assert_eq!(report.moved, 1);
        assert!(dir.path().join("Images/a.jpg").is_file());
        assert!(dir.path().join("Images/a_1.jpg").is_file());
    }

    #[test]
    fn organize_leaves_subdirectories_alone() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("keep")).unwrap();
        std::fs::write(dir.path().join("keep/inner.jpg"), "img").unwrap();

        let report = organize_dir(dir.path()).unwrap();
        assert_eq!(report.moved, 0);
        assert!(dir.path().join("keep/inner.jpg").is_file());
    }
}
