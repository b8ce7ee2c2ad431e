// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for building scratch repositories in tests.
//!
//! Uses shell git for setup to avoid coupling tests to gix internals.
//! Everything here panics on failure; it only runs under `cfg(test)`.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub(crate) fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Run a git command in `cwd`, panicking on failure. Returns trimmed stdout.
pub(crate) fn git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialize an empty repository at `path`, creating the directory.
pub(crate) fn init_repo(path: &Path) {
    std::fs::create_dir_all(path).expect("failed to create repo dir");
    git(&["init", "--quiet"], path);
    git(&["config", "user.email", "test@example.com"], path);
    git(&["config", "user.name", "Test"], path);
}

/// Initialize a repository with one commit. Returns the default branch name
/// (master or main depending on git config).
pub(crate) fn init_repo_with_commit(path: &Path) -> String {
    init_repo(path);
    std::fs::write(path.join("README"), "seed\n").expect("failed to write seed file");
    git(&["add", "."], path);
    git(&["commit", "--quiet", "-m", "Initial commit"], path);
    git(&["branch", "--show-current"], path)
}

/// Point the `origin` remote of `path` at `url`.
pub(crate) fn set_origin(path: &Path, url: &str) {
    git(&["remote", "add", "origin", url], path);
}

/// Permit `git submodule add` from local path remotes inside this repository.
/// Newer git blocks the file transport for submodules by default.
pub(crate) fn allow_file_protocol(path: &Path) {
    git(&["config", "protocol.file.allow", "always"], path);
}
