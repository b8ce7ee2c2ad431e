// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command operations using shell backend.
//!
//! ```text
//! cmd.rs --> ShellBackend --> git (submodules, index, .gitmodules)
//! ```

use crate::error::SubsumeResult;
use std::path::Path;

use super::backend::{GitMutation, ShellBackend};

/// Remove a path from the index without touching the work tree.
///
/// # Errors
///
/// Returns a `GitError` if the rm --cached operation fails.
pub fn untrack_path(repo_path: &Path, rel_path: &str) -> SubsumeResult<()> {
    ShellBackend::untrack_path(repo_path, rel_path)
}

/// Register a submodule at `submodule_path` cloning from `url`.
///
/// # Errors
///
/// Returns a `GitError` if the submodule cannot be added.
pub fn add_submodule(repo_path: &Path, url: &str, submodule_path: &str) -> SubsumeResult<()> {
    ShellBackend::add_submodule(repo_path, url, submodule_path)
}

/// Remove a named `submodule.<name>` section from `.gitmodules`.
///
/// # Errors
///
/// Returns a `GitError` if the section cannot be removed.
pub fn remove_manifest_section(repo_path: &Path, name: &str) -> SubsumeResult<()> {
    ShellBackend::remove_manifest_section(repo_path, name)
}
