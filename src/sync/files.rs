use log::info;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::SyncError;

/// Whether `dest` is missing or differs from `source` (size first, then bytes)
pub fn needs_update(source: &Path, dest: &Path) -> bool {
    let (Ok(source_meta), Ok(dest_meta)) = (fs::metadata(source), fs::metadata(dest)) else {
        return true;
    };

    if source_meta.len() != dest_meta.len() {
        return true;
    }

    !same_contents(source, dest).unwrap_or(false)
}

const CHUNK_SIZE: usize = 64 * 1024;

/// Compare two files chunk by chunk, stopping at the first difference
fn same_contents(a: &Path, b: &Path) -> io::Result<bool> {
    let mut a = File::open(a)?;
    let mut b = File::open(b)?;
    let mut chunk_a = vec![0u8; CHUNK_SIZE];
    let mut chunk_b = vec![0u8; CHUNK_SIZE];

    loop {
        let read_a = read_chunk(&mut a, &mut chunk_a)?;
        let read_b = read_chunk(&mut b, &mut chunk_b)?;
        if read_a != read_b || chunk_a[..read_a] != chunk_b[..read_b] {
            return Ok(false);
        }
        if read_a == 0 {
            return Ok(true);
        }
    }
}

/// Fill `buf` unless the reader hits end of file first
fn read_chunk(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

pub fn copy_image(source: &Path, dest: &Path) -> Result<(), SyncError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }
    fs::copy(source, dest).map_err(|e| SyncError::io(dest, e))?;
    Ok(())
}

/// Delete files under `root` that the current sync did not produce.
/// Returns how many were removed.
pub fn remove_orphans(root: &Path, keep: &HashSet<PathBuf>) -> Result<usize, SyncError> {
    let mut removed = 0;
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() && !keep.contains(entry.path()) {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            info!("  Removing orphan: {}", relative.display());
            fs::remove_file(entry.path()).map_err(|e| SyncError::io(entry.path(), e))?;
            removed += 1;
        }
    }

    if removed > 0 {
        info!("Removed {} orphaned files", removed);
    }
    Ok(removed)
}

/// Remove empty directories below `root`, deepest first
pub fn remove_empty_dirs(root: &Path) -> Result<(), SyncError> {
    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let is_empty = fs::read_dir(entry.path())
            .map_err(|e| SyncError::io(entry.path(), e))?
            .next()
            .is_none();
        if is_empty {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            info!("  Removing empty dir: {}", relative.display());
            fs::remove_dir(entry.path()).map_err(|e| SyncError::io(entry.path(), e))?;
        }
    }
    Ok(())
}
