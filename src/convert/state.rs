// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion states and terminal outcomes.

/// Phases a candidate moves through during conversion.
///
/// ```text
/// PendingConfirm -> Confirmed -> BackingUp -> CleaningResidue -> Registering
///                                                                  |
///                                             Succeeded <----------+--> RolledBack
/// ```
///
/// Everything before `Registering` is reversible (the backup move can be
/// undone); registration is the only irreversible step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertState {
    PendingConfirm,
    Confirmed,
    BackingUp,
    CleaningResidue,
    Registering,
}

impl ConvertState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PendingConfirm => "pending-confirm",
            Self::Confirmed => "confirmed",
            Self::BackingUp => "backing-up",
            Self::CleaningResidue => "cleaning-residue",
            Self::Registering => "registering",
        }
    }
}

/// Why an item ended in the `Skipped` terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The operator declined the per-item confirmation.
    Declined,
    /// The directory no longer exists (consumed earlier in the batch).
    Vanished,
    /// The directory is no longer a valid working tree root.
    NotAWorkTree,
    /// No origin URL known and none supplied.
    NoRemoteUrl,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Declined => "declined",
            Self::Vanished => "directory vanished",
            Self::NotAWorkTree => "not a working tree",
            Self::NoRemoteUrl => "no remote URL",
        };
        write!(f, "{text}")
    }
}

/// Terminal result of one candidate's conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// Registered as a submodule; the backup stays on disk as a safety net.
    Converted { path: String, url: String },
    /// Not attempted; the working tree is untouched.
    Skipped { path: String, reason: SkipReason },
    /// An operation failed; the original tree was restored from backup.
    RolledBack { path: String, error: String },
    /// Dry run: phases were logged, nothing was mutated.
    DryRun { path: String },
}

impl ConvertOutcome {
    /// The candidate path this outcome belongs to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Converted { path, .. }
            | Self::Skipped { path, .. }
            | Self::RolledBack { path, .. }
            | Self::DryRun { path } => path,
        }
    }

    #[must_use]
    pub const fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

impl std::fmt::Display for ConvertOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Converted { path, url } => write!(f, "{path}: converted ({url})"),
            Self::Skipped { path, reason } => write!(f, "{path}: skipped ({reason})"),
            Self::RolledBack { path, error } => write!(f, "{path}: rolled back ({error})"),
            Self::DryRun { path } => write!(f, "{path}: dry run, nothing changed"),
        }
    }
}
