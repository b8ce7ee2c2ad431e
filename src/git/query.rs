// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```
//!
//! Uses gix for read-only operations (faster, no subprocess overhead).

use crate::error::SubsumeResult;
use std::path::{Path, PathBuf};

use super::backend::{BranchLabel, GitQuery, GixBackend};

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Top-level directory of the work tree containing `path`.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery fails or the repository is bare.
pub fn work_tree_root(path: &Path) -> SubsumeResult<PathBuf> {
    GixBackend::work_tree_root(path)
}

/// Branch label of the work tree at `path` (named, detached, unborn).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn branch_label(path: &Path) -> SubsumeResult<BranchLabel> {
    GixBackend::branch_label(path)
}

/// URL of the `origin` remote, if configured.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery fails.
pub fn origin_url(path: &Path) -> SubsumeResult<Option<String>> {
    GixBackend::origin_url(path)
}

/// Check for uncommitted changes (staged, unstaged, or untracked files).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or status check fails.
pub fn has_uncommitted_changes(path: &Path) -> SubsumeResult<bool> {
    GixBackend::has_uncommitted_changes(path)
}

/// Check if a relative path is tracked in the repository index.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or index access fails.
pub fn is_path_tracked(repo_path: &Path, rel_path: &str) -> SubsumeResult<bool> {
    GixBackend::is_path_tracked(repo_path, rel_path)
}

/// The repository's git directory.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery fails.
pub fn git_dir(path: &Path) -> SubsumeResult<PathBuf> {
    GixBackend::git_dir(path)
}
