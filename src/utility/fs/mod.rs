// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities for moving candidate trees in and out of backup.
//!
//! ```text
//! move_dir(src, dst)
//!     fs::rename           same filesystem, atomic
//!     copy + remove_dir_all  cross-device fallback
//! ```

use crate::error::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;


/// Recursively copies all contents from src directory to dst directory.
///
/// Creates dst if it doesn't exist. Handles both files and directories
/// recursively. Symlinks are copied as the files they point to.
///
/// # Errors
///
/// Returns an error if any IO operation fails (creating directory, reading,
/// copying).
pub fn copy_dir_contents(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)
        .with_context(|| format!("failed to create directory {}", dst.display()))?;

    let entries =
        fs::read_dir(src).with_context(|| format!("failed to read directory {}", src.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry from {}", src.display()))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_contents(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path).with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    src_path.display(),
                    dst_path.display()
                )
            })?;
        }
    }

    Ok(())
}

/// Moves an entire directory tree from src to dst.
///
/// Tries `fs::rename` first. When the destination lives on a different
/// filesystem (backup roots often do), falls back to a recursive copy
/// followed by removal of the source. Either way the postcondition holds:
/// src no longer exists and dst holds the full tree.
///
/// # Errors
///
/// Returns an error if src does not exist, if dst already exists, or if any
/// IO operation fails.
pub fn move_dir(src: &Path, dst: &Path) -> Result<()> {
    if !src.exists() {
        anyhow::bail!("move source does not exist: {}", src.display());
    }
    if dst.exists() {
        anyhow::bail!("move destination already exists: {}", dst.display());
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(_) => {
            // Cross-device link or similar; copy then remove.
            copy_dir_contents(src, dst)?;
            fs::remove_dir_all(src)
                .with_context(|| format!("failed to remove {} after copy", src.display()))?;
            Ok(())
        }
    }
}

/// Removes a directory tree if it exists; missing paths are not an error.
///
/// # Errors
///
/// Returns an error if the tree exists but cannot be removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove {}", path.display()))?;
    }
    Ok(())
}
