// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for subsume.
//!
//! ```text
//! Config: GlobalConfig, ScanConfig, PathsConfig, ToolsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log conversion phases without mutating anything.
    pub dry: bool,
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. Truncated at the start of every run.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::from("subsume.log"),
        }
    }
}

/// Working-tree scan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory names that are pruned before descent. Nested repositories
    /// below these are never offered as candidates.
    pub exclude_dirs: Vec<String>,
}

impl ScanConfig {
    /// The default pruned directory names (dependency and build output).
    #[must_use]
    pub fn default_exclude_dirs() -> Vec<String> {
        [
            "node_modules",
            "target",
            ".hg",
            ".svn",
            "__pycache__",
            "venv",
            ".venv",
            "vendor-cache",
        ]
        .into_iter()
        .map(str::to_string)
        .collect()
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: Self::default_exclude_dirs(),
        }
    }
}

/// External tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Name or path of the fuzzy selector binary.
    pub fzf: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            fzf: "fzf".to_string(),
        }
    }
}
