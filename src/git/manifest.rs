// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule manifest (`.gitmodules`) access.
//!
//! ```text
//! load()  git config -f .gitmodules --get-regexp ^submodule\..*\.path$
//!             |
//!             v
//!    submodule.<name>.path <value>   -->  name -> path
//! ```
//!
//! The manifest is read through the git CLI rather than parsed by hand so
//! that quoting and include rules stay git's problem. Section removal goes
//! through `git config --remove-section` (see [`crate::git::cmd`]).

use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::SubsumeResult;

use super::backend::ShellBackend;

/// Parsed view of the parent's `.gitmodules` path entries.
///
/// Maps submodule name to its `path` value. Read-only during scanning (the
/// exclusion filter); conversion mutates the underlying file through git.
#[derive(Debug, Clone, Default)]
pub struct SubmoduleManifest {
    entries: BTreeMap<String, String>,
}

impl SubmoduleManifest {
    /// Load the manifest of the repository at `repo_root`.
    ///
    /// A missing `.gitmodules` file or one without submodule sections yields
    /// an empty manifest.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the git binary cannot be executed.
    pub fn load(repo_root: &Path) -> SubsumeResult<Self> {
        if !repo_root.join(".gitmodules").exists() {
            return Ok(Self::default());
        }

        let output = ShellBackend::git_command_ok(
            &[
                "config",
                "-f",
                ".gitmodules",
                "--get-regexp",
                r"^submodule\..*\.path$",
            ],
            repo_root,
        )?;

        // Exit code 1 with no output means "no matching keys".
        let Some(output) = output else {
            return Ok(Self::default());
        };

        Ok(Self::parse(&output))
    }

    fn parse(output: &str) -> Self {
        static KEY_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
            Regex::new(r"^submodule\.(.+)\.path$").expect("constant regex")
        });

        let mut entries = BTreeMap::new();
        for line in output.lines() {
            let Some((key, value)) = line.split_once(' ') else {
                continue;
            };
            if let Some(captures) = KEY_RE.captures(key.trim()) {
                entries.insert(captures[1].to_string(), value.trim().to_string());
            }
        }
        Self { entries }
    }

    /// All registered submodule paths, in name order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.entries.values().map(String::as_str).collect()
    }

    /// Check if `rel_path` is registered as a submodule path.
    #[must_use]
    pub fn has_path(&self, rel_path: &str) -> bool {
        self.entries.values().any(|p| p == rel_path)
    }

    /// The submodule name whose `path` entry matches `rel_path`.
    #[must_use]
    pub fn name_for_path(&self, rel_path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, p)| p.as_str() == rel_path)
            .map(|(name, _)| name.as_str())
    }

    /// Number of registered submodules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no submodules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SubmoduleManifest;

    #[test]
    fn test_parse_maps_names_to_paths() {
        let manifest = SubmoduleManifest::parse(
            "submodule.vendor/lib-a.path vendor/lib-a\nsubmodule.libs.path third_party/libs",
        );
        assert_eq!(manifest.len(), 2);
        assert!(manifest.has_path("vendor/lib-a"));
        assert_eq!(manifest.name_for_path("third_party/libs"), Some("libs"));
        assert!(!manifest.has_path("vendor/lib-b"));
    }

    #[test]
    fn test_parse_ignores_malformed_lines() {
        let manifest = SubmoduleManifest::parse("garbage\nsubmodule.a.url https://x/a.git");
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_name_with_dots_resolves() {
        // Section names may themselves contain dots; the key regex is greedy
        // up to the trailing `.path`.
        let manifest = SubmoduleManifest::parse("submodule.my.lib.path vendor/my.lib");
        assert_eq!(manifest.name_for_path("vendor/my.lib"), Some("my.lib"));
    }
}
