// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persisted state: the last validated start directory.
//!
//! ```text
//! StateStore (trait)
//!   load_last_path()   read at startup
//!   save_last_path()   written after each successful validation
//!        |
//!        v
//! JsonFileStore   state.json, production
//! MemoryStore     tests
//! ```
//!
//! A corrupt or missing state file is treated as "no saved path"; the tool
//! must never refuse to start over stale state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use anyhow::Context;

#[cfg(test)]
mod tests;

/// Persistence for the resolver's last validated start directory.
pub trait StateStore {
    /// The last saved path, if any.
    fn load_last_path(&self) -> Option<PathBuf>;

    /// Persist `path` as the last validated start directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    fn save_last_path(&mut self, path: &Path) -> Result<()>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedState {
    last_path: Option<PathBuf>,
}

/// Production store writing a small JSON document.
pub struct JsonFileStore {
    file: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(file: PathBuf) -> Self {
        Self { file }
    }
}

impl StateStore for JsonFileStore {
    fn load_last_path(&self) -> Option<PathBuf> {
        let raw = std::fs::read_to_string(&self.file).ok()?;
        match serde_json::from_str::<PersistedState>(&raw) {
            Ok(state) => state.last_path,
            Err(e) => {
                debug!(file = %self.file.display(), error = %e, "ignoring corrupt state file");
                None
            }
        }
    }

    fn save_last_path(&mut self, path: &Path) -> Result<()> {
        if let Some(parent) = self.file.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create state directory {}", parent.display()))?;
        }
        let state = PersistedState {
            last_path: Some(path.to_path_buf()),
        };
        let raw = serde_json::to_string_pretty(&state).context("failed to serialize state")?;
        std::fs::write(&self.file, raw)
            .with_context(|| format!("failed to write state file {}", self.file.display()))?;
        Ok(())
    }
}

/// In-memory store for tests and for runs without a resolvable state path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    last_path: Option<PathBuf>,
}

impl StateStore for MemoryStore {
    fn load_last_path(&self) -> Option<PathBuf> {
        self.last_path.clone()
    }

    fn save_last_path(&mut self, path: &Path) -> Result<()> {
        self.last_path = Some(path.to_path_buf());
        Ok(())
    }
}
