// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Residue cleanup for re-attempted conversions.
//!
//! A conversion that failed between backup and registration can leave three
//! kinds of stale bookkeeping behind for the same relative path:
//!
//! 1. an index entry (the path was tracked in the parent),
//! 2. a `submodule.<name>` section in `.gitmodules`,
//! 3. a `modules/<path>` metadata directory under the parent's git dir.
//!
//! All three are removed before registering again, which keeps a second
//! attempt from producing duplicate sections or index entries. Files are
//! never deleted here; the candidate tree was already moved out.

use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::git::manifest::SubmoduleManifest;
use crate::git::{cmd, query};
use crate::utility::fs::remove_dir_if_exists;

/// Remove stale bookkeeping for `rel_path` in the parent repository.
///
/// # Errors
///
/// Returns an error if an index, manifest, or metadata removal fails.
pub fn clean_residue(parent_root: &Path, rel_path: &str) -> Result<()> {
    if query::is_path_tracked(parent_root, rel_path)? {
        debug!(path = rel_path, "untracking stale index entry");
        cmd::untrack_path(parent_root, rel_path)?;
    }

    let manifest = SubmoduleManifest::load(parent_root)?;
    if let Some(name) = manifest.name_for_path(rel_path) {
        debug!(path = rel_path, name, "removing stale manifest section");
        cmd::remove_manifest_section(parent_root, name)?;
    }

    let modules_dir = query::git_dir(parent_root)?.join("modules").join(rel_path);
    if modules_dir.exists() {
        debug!(path = %modules_dir.display(), "removing stale submodule metadata");
        remove_dir_if_exists(&modules_dir)?;
    }

    Ok(())
}
