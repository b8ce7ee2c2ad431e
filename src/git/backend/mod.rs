// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)  --> GixBackend (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```

use crate::error::{GitError, GixError, SubsumeResult};
use std::path::{Path, PathBuf};

// --- Branch Label ---

/// The branch state of a working tree, as shown next to candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchLabel {
    /// HEAD is on a named branch.
    Named(String),
    /// HEAD is detached; carries the short hash of the checked-out commit.
    Detached(String),
    /// HEAD is unborn (no commits yet) or could not be resolved.
    Unknown,
}

impl std::fmt::Display for BranchLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Detached(hash) => write!(f, "detached@{hash}"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Implementors provide methods to inspect repository state without
/// modification.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Top-level directory of the work tree containing `path`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery fails or the repository
    /// is bare.
    fn work_tree_root(path: &Path) -> SubsumeResult<PathBuf>;

    /// Branch label of the work tree at `path` (named, detached, unborn).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn branch_label(path: &Path) -> SubsumeResult<BranchLabel>;

    /// URL of the `origin` remote, if configured.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery fails.
    fn origin_url(path: &Path) -> SubsumeResult<Option<String>>;

    /// Check for uncommitted changes (staged, unstaged, or untracked files).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or status check fails.
    fn has_uncommitted_changes(path: &Path) -> SubsumeResult<bool>;

    /// Check if a relative path (file, directory, or gitlink) is tracked in
    /// the repository index.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or index access fails.
    fn is_path_tracked(repo_path: &Path, rel_path: &str) -> SubsumeResult<bool>;

    /// The repository's git directory (where `modules/` metadata lives).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery fails.
    fn git_dir(path: &Path) -> SubsumeResult<PathBuf>;
}

// --- Mutation Trait (Write operations) ---

/// Git mutation operations that modify repository state.
///
/// These operations use shell git for submodule handling and full git CLI
/// compatibility.
pub trait GitMutation {
    /// Remove a path from the index without touching the work tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the rm --cached operation fails.
    fn untrack_path(repo_path: &Path, rel_path: &str) -> SubsumeResult<()>;

    /// Register a submodule at `submodule_path` cloning from `url`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the submodule cannot be added.
    fn add_submodule(repo_path: &Path, url: &str, submodule_path: &str) -> SubsumeResult<()>;

    /// Remove a named `submodule.<name>` section from `.gitmodules`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the section cannot be removed.
    fn remove_manifest_section(repo_path: &Path, name: &str) -> SubsumeResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides efficient read-only operations without spawning subprocesses.
pub struct GixBackend;

impl GixBackend {
    fn discover(path: &Path) -> SubsumeResult<gix::Repository> {
        gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))).into())
    }
}

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn work_tree_root(path: &Path) -> SubsumeResult<PathBuf> {
        let repo = Self::discover(path)?;
        let workdir = repo
            .workdir()
            .ok_or(GitError::Gix(GixError::BareRepository))?;
        Ok(workdir.to_path_buf())
    }

    fn branch_label(path: &Path) -> SubsumeResult<BranchLabel> {
        use gix::head::Kind;

        let repo = Self::discover(path)?;
        let head = repo
            .head()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(match head.kind {
            Kind::Symbolic(reference) => BranchLabel::Named(reference.name.shorten().to_string()),
            Kind::Detached { target, .. } => {
                BranchLabel::Detached(target.to_hex_with_len(7).to_string())
            }
            Kind::Unborn(_) => BranchLabel::Unknown,
        })
    }

    fn origin_url(path: &Path) -> SubsumeResult<Option<String>> {
        let repo = Self::discover(path)?;
        let url = repo
            .config_snapshot()
            .string("remote.origin.url")
            .map(|u| u.to_string());
        Ok(url)
    }

    fn has_uncommitted_changes(path: &Path) -> SubsumeResult<bool> {
        use gix::status::UntrackedFiles;

        let repo = Self::discover(path)?;

        let has_changes = repo
            .status(gix::progress::Discard)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to prepare status check".to_string(),
            })?
            .untracked_files(UntrackedFiles::Files)
            .into_iter(None)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to check repository status".to_string(),
            })?
            .next()
            .is_some();

        Ok(has_changes)
    }

    fn is_path_tracked(repo_path: &Path, rel_path: &str) -> SubsumeResult<bool> {
        let repo = Self::discover(repo_path)?;
        // A repository without an index file tracks nothing.
        let Some(index) = repo
            .try_index()
            .map_err(|e| GitError::Gix(GixError::Index(e)))?
        else {
            return Ok(false);
        };
        let state: &gix::index::State = &index;

        let rel = rel_path.trim_end_matches('/');
        let prefix = format!("{rel}/");
        Ok(state.entries().iter().any(|entry| {
            let entry_path: &[u8] = entry.path(state).as_ref();
            entry_path == rel.as_bytes() || entry_path.starts_with(prefix.as_bytes())
        }))
    }

    fn git_dir(path: &Path) -> SubsumeResult<PathBuf> {
        let repo = Self::discover(path)?;
        Ok(repo.git_dir().to_path_buf())
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// Required for submodule registration, index removal, and `.gitmodules`
/// section editing.
pub struct ShellBackend;

impl ShellBackend {
    /// Execute a git command. Sets `GIT_TERMINAL_PROMPT=0` so a misconfigured
    /// remote can never hang the sequential conversion loop on a credential
    /// prompt.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> SubsumeResult<String> {
        use std::process::Command;

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Like [`git_command`](Self::git_command), but a non-zero exit is
    /// reported as `Ok(None)` instead of an error. Used for queries where
    /// "no match" is an exit code, not a failure (`git config --get-regexp`).
    pub(crate) fn git_command_ok(args: &[&str], cwd: &Path) -> SubsumeResult<Option<String>> {
        use std::process::Command;

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            return Ok(None);
        }
        Ok(Some(
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
        ))
    }
}

impl GitMutation for ShellBackend {
    fn untrack_path(repo_path: &Path, rel_path: &str) -> SubsumeResult<()> {
        // -f: staged-but-uncommitted entries (a half-done earlier attempt)
        // would otherwise make git refuse. --cached never touches files.
        Self::git_command(
            &["rm", "-r", "-f", "--cached", "--quiet", "--", rel_path],
            repo_path,
        )?;
        Ok(())
    }

    fn add_submodule(repo_path: &Path, url: &str, submodule_path: &str) -> SubsumeResult<()> {
        Self::git_command(
            &["submodule", "add", "--quiet", url, submodule_path],
            repo_path,
        )?;
        Ok(())
    }

    fn remove_manifest_section(repo_path: &Path, name: &str) -> SubsumeResult<()> {
        let section = format!("submodule.{name}");
        Self::git_command(
            &["config", "-f", ".gitmodules", "--remove-section", &section],
            repo_path,
        )?;
        Ok(())
    }
}

impl GitQuery for ShellBackend {
    fn is_git_repo(path: &Path) -> bool {
        Self::git_command(&["rev-parse", "--is-inside-work-tree"], path).is_ok()
    }

    fn work_tree_root(path: &Path) -> SubsumeResult<PathBuf> {
        let root = Self::git_command(&["rev-parse", "--show-toplevel"], path)?;
        Ok(PathBuf::from(root))
    }

    fn branch_label(path: &Path) -> SubsumeResult<BranchLabel> {
        // Unborn HEAD still has a symbolic name; check for a commit first.
        if Self::git_command(&["rev-parse", "--verify", "--quiet", "HEAD"], path).is_err() {
            return Ok(BranchLabel::Unknown);
        }
        if let Ok(branch) = Self::git_command(&["symbolic-ref", "--short", "HEAD"], path) {
            return Ok(BranchLabel::Named(branch));
        }
        let hash = Self::git_command(&["rev-parse", "--short=7", "HEAD"], path)?;
        Ok(BranchLabel::Detached(hash))
    }

    fn origin_url(path: &Path) -> SubsumeResult<Option<String>> {
        Ok(Self::git_command_ok(&["remote", "get-url", "origin"], path)?
            .filter(|url| !url.is_empty()))
    }

    fn has_uncommitted_changes(path: &Path) -> SubsumeResult<bool> {
        let output = Self::git_command(&["status", "--porcelain"], path)?;
        Ok(!output.is_empty())
    }

    fn is_path_tracked(repo_path: &Path, rel_path: &str) -> SubsumeResult<bool> {
        let output = Self::git_command(&["ls-files", "--", rel_path], repo_path)?;
        Ok(!output.is_empty())
    }

    fn git_dir(path: &Path) -> SubsumeResult<PathBuf> {
        let dir = Self::git_command(&["rev-parse", "--absolute-git-dir"], path)?;
        Ok(PathBuf::from(dir))
    }
}
