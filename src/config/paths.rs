// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! backup_root/                 (outside any working tree)
//!   20260714-101502-vendor-lib-a/
//!   20260714-101502-vendor-lib-b/
//! state_file                   (last validated start directory, JSON)
//! ```
//!
//! Both paths are optional and resolved to platform directories if not set.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Backup and state path configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory receiving timestamped backups of candidates before
    /// conversion (default: platform cache dir + `subsume/backups`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_root: Option<PathBuf>,
    /// File persisting the last validated start directory
    /// (default: platform state dir + `subsume/state.json`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
}

impl PathsConfig {
    /// Resolve unset paths to their platform defaults.
    ///
    /// Falls back to the system temp directory when no platform directory
    /// can be determined (no home directory).
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Result` to keep the resolve step
    /// uniform with the rest of the configuration pipeline.
    pub fn resolve(&mut self) -> Result<()> {
        if self.backup_root.is_none() {
            let base = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
            self.backup_root = Some(base.join("subsume").join("backups"));
        }

        if self.state_file.is_none() {
            let base = dirs::state_dir()
                .or_else(dirs::data_local_dir)
                .unwrap_or_else(std::env::temp_dir);
            self.state_file = Some(base.join("subsume").join("state.json"));
        }

        Ok(())
    }

    /// Get the resolved backup root.
    ///
    /// Only meaningful after [`resolve`](Self::resolve); falls back to the
    /// temp directory when called on an unresolved config.
    #[must_use]
    pub fn backup_root(&self) -> PathBuf {
        self.backup_root
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("subsume").join("backups"))
    }

    /// Get the resolved state file path, if any.
    #[must_use]
    pub fn state_file(&self) -> Option<&Path> {
        self.state_file.as_deref()
    }
}
