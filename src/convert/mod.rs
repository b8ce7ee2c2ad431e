// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion of nested repositories into submodules.
//!
//! ```text
//! PendingConfirm -> Confirmed -> BackingUp -> CleaningResidue -> Registering
//!        |                                                          |
//!        v                                                          v
//!     Skipped                                           Succeeded | RolledBack
//! ```
//!
//! Phase 1 (backup move + residue cleanup) is reversible; phase 2
//! (registration) is the only irreversible step and the only trigger for
//! rollback. Backups are never deleted automatically.

pub mod backup;
pub mod engine;
pub mod residue;
pub mod state;

pub use backup::BackupRecord;
pub use engine::{ConvertContext, convert_batch};
pub use residue::clean_residue;
pub use state::{ConvertOutcome, ConvertState, SkipReason};

#[cfg(test)]
mod tests;
