//! Storage usage: per-entry recursive sizes and human-readable formatting.

use std::path::Path;

use crate::error::Result;

/// One immediate child of the scanned directory with its total size.
#[derive(Debug, Clone)]
pub struct UsageEntry {
    pub name: String,
    pub size: u64,
    pub is_dir: bool,
}

/// List the immediate children of `dir` with recursively summed sizes,
/// largest first.
pub fn scan_usage(dir: &Path) -> Result<Vec<UsageEntry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        entries.push(UsageEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            size: entry_size(&path),
            is_dir: path.is_dir(),
        });
    }
    entries.sort_by(|a, b| b.size.cmp(&a.size));
    Ok(entries)
}

/// Total size of a path: file length, or the direct recursive sum of a
/// directory's contents. Unreadable entries count as zero.
pub fn entry_size(path: &Path) -> u64 {
    if path.is_dir() {
        match std::fs::read_dir(path) {
            Ok(entries) => entries
                .flatten()
                .map(|entry| entry_size(&entry.path()))
                .sum(),
            Err(e) => {
                log::warn!("storage: cannot read {}: {e}", path.display());
                0
            }
        }
    } else {
        std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
    }
}

/// Format a byte count with binary units, one decimal place from KB up.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_size_picks_sensible_units() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(1024), "1.0 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(1024 * 1024), "1.0 MB");
        assert_eq!(human_size(5 * 1024 * 1024 * 1024), "5.0 GB");
    }

    #[test]
    fn directory_sizes_sum_recursively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
        std::fs::write(dir.path().join("a/top.bin"), vec![0u8; 100]).unwrap();
        std::fs::write(dir.path().join("a/b/deep.bin"), vec![0u8; 50]).unwrap();

        assert_eq!(entry_size(&dir.path().join("a")), 150);
    }

    #[test]
    fn scan_sorts_largest_first() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("small.bin"), vec![0u8; 10]).unwrap();
        std::fs::write(dir.path().join("big.bin"), vec![0u8; 1000]).unwrap();
        std::fs::create_dir(dir.path().join("mid")).unwrap();
        std::fs::write(dir.path().join("mid/file.bin"), vec![0u8; 100]).unwrap();

        let entries = scan_usage(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["big.bin", "mid", "small.bin"]);
        assert!(entries[1].is_dir);
        assert_eq!(entries[1].size, 100);
    }
}
