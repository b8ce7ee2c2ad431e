// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Timestamped backups of candidate trees.
//!
//! ```text
//! backup_root/20260714-101502-vendor-lib-a/   <-- moved, not copied
//! ```
//!
//! The move doubles as the "detach from the working tree" step: after
//! `create()` the candidate path is gone from the parent. Backups are never
//! deleted automatically.

use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::utility::fs::move_dir;

/// A candidate tree moved out of the working tree before conversion.
#[derive(Debug)]
pub struct BackupRecord {
    original: PathBuf,
    backup: PathBuf,
}

impl BackupRecord {
    /// Move the candidate at `rel_path` (under `parent_root`) into a
    /// uniquely named directory below `backup_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the move fails; in that case the original tree
    /// is still in place (a partially copied backup directory may remain).
    pub fn create(backup_root: &Path, parent_root: &Path, rel_path: &str) -> Result<Self> {
        let original = parent_root.join(rel_path);
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let sanitized = rel_path.replace(['/', '\\'], "-");

        // Several items of one batch can share a timestamp.
        let mut backup = backup_root.join(format!("{stamp}-{sanitized}"));
        let mut counter = 1;
        while backup.exists() {
            backup = backup_root.join(format!("{stamp}-{sanitized}-{counter}"));
            counter += 1;
        }

        move_dir(&original, &backup)?;
        info!(from = %original.display(), to = %backup.display(), "backed up");

        Ok(Self { original, backup })
    }

    /// Move the backed-up tree back to its original path.
    ///
    /// The original path must not exist; the caller removes any partial
    /// clone first.
    ///
    /// # Errors
    ///
    /// Returns an error if the move back fails.
    pub fn restore(&self) -> Result<()> {
        move_dir(&self.backup, &self.original)?;
        info!(path = %self.original.display(), "restored from backup");
        Ok(())
    }

    /// Where the tree was moved to.
    #[must_use]
    pub fn backup_path(&self) -> &Path {
        &self.backup
    }

    /// Where the tree came from.
    #[must_use]
    pub fn original_path(&self) -> &Path {
        &self.original
    }
}
