// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for subsume.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. subsume.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. SUBSUME_* env vars
//! 5. --set KEY=VALUE overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SUBSUME_GLOBAL_DRY=true       → global.dry = true
//! SUBSUME_TOOLS_FZF=/opt/fzf    → tools.fzf = "/opt/fzf"
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use loader::ConfigLoader;
pub use paths::PathsConfig;
pub use types::{GlobalConfig, ScanConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Scanner options.
    pub scan: ScanConfig,
    /// Backup and state paths.
    pub paths: PathsConfig,
    /// External tool names.
    pub tools: ToolsConfig,
}

impl Config {
    /// Resolve derived paths and validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if path resolution fails.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve()?;
        Ok(())
    }
}
