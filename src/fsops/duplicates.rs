//! Duplicate detection: bucket files by size, confirm by content hash.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Files with identical content. `paths` has at least two entries.
#[derive(Debug)]
pub struct DuplicateGroup {
    /// Size in bytes of each file in the group.
    pub size: u64,
    pub paths: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Bytes that would be reclaimed by keeping one copy.
    pub fn wasted_bytes(&self) -> u64 {
        self.size * (self.paths.len() as u64 - 1)
    }
}

/// Walk `dir` recursively and group files with identical content.
///
/// Two direct passes: files are first bucketed by size, then every size
/// bucket with more than one member is confirmed by a full BLAKE3 content
/// hash. Groups are returned largest wasted-bytes first. Unreadable entries
/// are logged and skipped.
pub fn find_duplicates(dir: &Path) -> Result<Vec<DuplicateGroup>> {
    let mut by_size: HashMap<u64, Vec<PathBuf>> = HashMap::new();
    collect_files(dir, &mut by_size)?;

    let mut groups = Vec::new();
    for (size, paths) in by_size {
        if paths.len() < 2 {
            continue;
        }
        let mut by_hash: HashMap<String, Vec<PathBuf>> = HashMap::new();
        for path in paths {
            match hash_file(&path) {
                Ok(hash) => by_hash.entry(hash).or_default().push(path),
                Err(e) => log::warn!("duplicates: cannot hash {}: {e}", path.display()),
            }
        }
        for (_, mut same) in by_hash {
            if same.len() > 1 {
                same.sort();
                groups.push(DuplicateGroup { size, paths: same });
            }
        }
    }

    groups.sort_by(|a, b| b.wasted_bytes().cmp(&a.wasted_bytes()));
    Ok(groups)
}

fn collect_files(dir: &Path, by_size: &mut HashMap<u64, Vec<PathBuf>>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            if let Err(e) = collect_files(&path, by_size) {
                log::warn!("duplicates: cannot read {}: {e}", path.display());
            }
        } else if path.is_file() {
            match entry.metadata() {
                Ok(meta) => by_size.entry(meta.len()).or_default().push(path),
                Err(e) => log::warn!("duplicates: no metadata for {}: {e}", path.display()),
            }
        }
    }
    Ok(())
}

/// Full-content BLAKE3 hash of one file, in hex form.
fn hash_file(path: &Path) -> io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = blake3::Hasher::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hasher.finalize().to_hex().to_string())
}
