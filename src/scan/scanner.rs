// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working-tree traversal for nested `.git` markers.
//!
//! ```text
//! scan_candidates(root, manifest, options)
//!          |
//!          v
//!   WalkBuilder(root)
//!     .filter_entry      prune .git + excluded names BEFORE descent
//!     no ignore files    gitignored vendor trees must still be found
//!          |
//!          v
//!   dir has .git marker? not root? not in .gitmodules?
//!          |
//!          v
//!   sort + dedup, attach origin/branch lookups
//! ```

use bon::Builder;
use ignore::WalkBuilder;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::error::Result;
use crate::git::manifest::SubmoduleManifest;
use crate::git::{BranchLabel, query};

use super::candidate::CandidateRepo;

/// Options for the nested-repository scan.
#[derive(Debug, Clone, Builder)]
pub struct ScanOptions {
    /// Directory names pruned before descent (exact match).
    #[builder(setters(name = with_exclude_dirs), default)]
    exclude_dirs: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::builder()
            .with_exclude_dirs(ScanConfig::default_exclude_dirs())
            .build()
    }
}

impl ScanOptions {
    /// Build options from the `[scan]` configuration section.
    #[must_use]
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::builder()
            .with_exclude_dirs(config.exclude_dirs.clone())
            .build()
    }

    /// Returns the excluded directory names.
    #[must_use]
    pub fn exclude_dirs(&self) -> &[String] {
        &self.exclude_dirs
    }
}

/// Scan the parent working tree for nested repositories.
///
/// Returns the ordered (lexicographic by relative path), duplicate-free set
/// of candidates: directories below `parent_root` bearing a `.git` marker
/// (directory or gitfile), excluding the root itself, paths registered in
/// the manifest, and anything below an excluded directory name. Excluded
/// names and `.git` internals are pruned before descent, so a nested marker
/// below them is never even visited.
///
/// # Errors
///
/// Returns an error if a relative path cannot be derived from a visited
/// entry. Unreadable directories are logged and skipped, not fatal.
pub fn scan_candidates(
    parent_root: &Path,
    manifest: &SubmoduleManifest,
    options: &ScanOptions,
) -> Result<Vec<CandidateRepo>> {
    let mut walker = WalkBuilder::new(parent_root);
    // Ignore files must not hide candidates: vendored nested repositories
    // are frequently gitignored in the parent.
    walker
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .follow_links(false);

    let excluded = options.exclude_dirs().to_vec();
    walker.filter_entry(move |entry| {
        if entry.file_type().is_some_and(|ft| ft.is_dir())
            && let Some(name) = entry.file_name().to_str()
            && (name == ".git" || excluded.iter().any(|skip| skip == name))
        {
            return false; // Don't descend into this directory
        }
        true
    });

    let mut rel_paths = Vec::new();
    for result in walker.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "scan error");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        let path = entry.path();
        if path == parent_root {
            continue;
        }
        if !path.join(".git").exists() {
            continue;
        }

        let rel = path.strip_prefix(parent_root).map_err(|_| {
            anyhow::anyhow!(
                "visited entry {} outside scan root {}",
                path.display(),
                parent_root.display()
            )
        })?;
        let rel_str = rel.to_string_lossy().into_owned();

        if manifest.has_path(&rel_str) {
            debug!(path = %rel_str, "already registered as submodule, excluded");
            continue;
        }

        rel_paths.push(rel_str);
    }

    // Sort for determinism; the selection UI and conversion order follow it.
    rel_paths.sort();
    rel_paths.dedup();

    let candidates = rel_paths
        .into_iter()
        .map(|rel| {
            let abs = parent_root.join(&rel);
            let origin = query::origin_url(&abs).ok().flatten();
            let branch = query::branch_label(&abs).unwrap_or(BranchLabel::Unknown);
            CandidateRepo::new(rel, origin, branch)
        })
        .collect();

    Ok(candidates)
}
