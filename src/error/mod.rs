// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            SubsumeError (~24 bytes)
//!                   |
//!   +------+-------+-------+--------+------+
//!   |      |       |       |        |      |
//!   v      v       v       v        v      v
//! Bail    Git    Config  Prompt  Convert  Fs   Io/Other
//!         Box     Box     Box      Box    Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git     Gix, CommandFailed, NotAWorkTree
//!   Config  MissingKey, InvalidValue, NotFound
//!   Prompt  TtyUnavailable, Io, Selector, ToolMissing
//!   Convert Registration, RollbackFailed
//!   Fs      NotFound, IoError
//!
//! All variants boxed => SubsumeError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SubsumeError`].
pub type SubsumeResult<T> = std::result::Result<T, SubsumeError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SubsumeError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Interactive prompt or selector error.
    #[error("prompt error: {0}")]
    Prompt(#[from] Box<PromptError>),

    /// Conversion error.
    #[error("convert error: {0}")]
    Convert(#[from] Box<ConvertError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`SubsumeError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> SubsumeError {
    SubsumeError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SubsumeError {
                fn from(err: $error) -> Self {
                    SubsumeError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    PromptError => Prompt,
    ConvertError => Convert,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// gix has multiple error types that are converted through this enum.
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to access repository index.
    #[error("failed to access index: {0}")]
    Index(#[from] gix::worktree::open_index::Error),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository)")]
    BareRepository,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Path is not inside a Git working tree.
    #[error("not inside a git working tree: {path}")]
    NotAWorkTree { path: String },

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Prompt Errors ---

/// Interactive prompt and selector errors.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The controlling terminal could not be opened.
    #[error("cannot open controlling terminal: {0}")]
    TtyUnavailable(#[source] std::io::Error),

    /// I/O error while prompting.
    #[error("prompt io error: {0}")]
    Io(#[from] std::io::Error),

    /// The selection tool failed.
    #[error("selector failed: {message}")]
    Selector { message: String },

    /// A required external tool could not be located.
    #[error("required tool not found: '{tool}' (not in PATH)")]
    ToolMissing { tool: String },
}

// --- Convert Errors ---

/// Conversion errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Submodule registration failed.
    #[error("failed to register submodule at '{path}': {message}")]
    Registration { path: String, message: String },

    /// Rollback after a failed registration did not complete.
    ///
    /// The backup directory still holds the original tree.
    #[error("rollback incomplete for '{path}' (backup kept at {backup}): {message}")]
    RollbackFailed {
        path: String,
        backup: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
