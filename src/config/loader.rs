// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! defaults -> subsume.toml -> --config files -> SUBSUME_* env -> --set
//!                                                                  |
//!                                                                  v
//!                                                       build() --> Config
//! ```
//!
//! Later sources override earlier ones; `--set` overrides always win.

use std::fmt::Write as _;

use super::Config;
use crate::error::Result;

/// Builder layering TOML files, environment variables, and overrides into a
/// validated [`Config`].
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<String>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    fn record_source(&mut self, kind: &str, detail: impl std::fmt::Display) {
        let mut line = String::new();
        let _ = write!(line, "{}. [{kind}] {detail}", self.sources.len() + 1);
        self.sources.push(line);
    }

    /// Adds a required TOML file. `build()` fails if it is missing or
    /// malformed.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.record_source("file", path.display());
        self
    }

    /// Adds a TOML file that may be absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.exists() {
            self.record_source("optional", path.display());
        }
        self
    }

    /// Adds inline TOML content, mostly for tests.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.record_source("string", "<string>");
        self
    }

    /// Enables `PREFIX_SECTION_KEY` environment variables. Applied after all
    /// file sources regardless of call order.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Applies a single `key = value` override with the highest precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the value cannot be
    /// converted to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Merges all sources and produces a resolved, validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, any source fails to
    /// parse, or the merged result does not deserialize into [`Config`].
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                config::Environment::with_prefix(prefix)
                    .separator("_")
                    .try_parsing(true),
            );
        }
        let merged = builder.build()?;
        let mut config: Config = merged.try_deserialize()?;
        config.resolve_and_validate()?;
        Ok(config)
    }

    /// Human-readable list of the file sources that were loaded.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources.clone()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
