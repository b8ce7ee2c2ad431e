// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-candidate conversion driver.
//!
//! ```text
//! convert_batch(ctx, selected, prompts)
//!     for each candidate, in selection order:
//!       confirm (Enter = proceed)     -> Skipped on anything else
//!       preconditions (exists, repo)  -> Skipped with warning
//!       origin URL or prompt          -> Skipped on empty
//!       backup (move out)             \
//!       clean residue                  } reversible, phase 1
//!       register submodule            /  irreversible, phase 2
//!           ok  -> Converted  (backup kept)
//!           err -> rollback: delete partial clone, move backup home
//! ```
//!
//! One item's failure never blocks the rest of the batch; every item ends
//! in exactly one [`ConvertOutcome`].

use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{ConvertError, Result};
use crate::git::{cmd, query};
use crate::prompt::PromptProvider;
use crate::scan::CandidateRepo;
use crate::utility::fs::remove_dir_if_exists;

use super::backup::BackupRecord;
use super::residue::clean_residue;
use super::state::{ConvertOutcome, ConvertState, SkipReason};

/// Shared inputs of a conversion batch.
#[derive(Debug, Clone, Copy)]
pub struct ConvertContext<'a> {
    /// Root of the repository receiving the submodules.
    pub parent_root: &'a Path,
    /// Directory receiving backups, outside the working tree.
    pub backup_root: &'a Path,
    /// Log the mutating phases without performing them.
    pub dry: bool,
}

/// Convert the selected candidates one after another, in selection order.
///
/// Returns one outcome per candidate. Operational failures become outcomes;
/// only a broken prompt channel is an error.
///
/// # Errors
///
/// Returns an error if the prompt channel fails.
pub fn convert_batch(
    ctx: &ConvertContext<'_>,
    selected: &[CandidateRepo],
    prompts: &mut dyn PromptProvider,
) -> Result<Vec<ConvertOutcome>> {
    let mut outcomes = Vec::with_capacity(selected.len());
    for candidate in selected {
        let outcome = convert_one(ctx, candidate, prompts)?;
        info!(path = candidate.rel_path(), outcome = %outcome, "item finished");
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn convert_one(
    ctx: &ConvertContext<'_>,
    candidate: &CandidateRepo,
    prompts: &mut dyn PromptProvider,
) -> Result<ConvertOutcome> {
    let rel = candidate.rel_path();
    let mut state = ConvertState::PendingConfirm;
    debug!(path = rel, state = state.as_str(), "item started");

    // Empty input proceeds; any other input (or end of input) skips.
    let answer = prompts.read_line(&format!(
        "convert '{rel}'? Enter to proceed, anything else to skip: "
    ))?;
    if !matches!(&answer, Some(line) if line.trim().is_empty()) {
        return Ok(skipped(rel, SkipReason::Declined));
    }

    // A prior item in this batch may have consumed or moved the directory.
    let original = ctx.parent_root.join(rel);
    if !original.exists() {
        warn!(path = rel, "candidate directory vanished, skipping");
        return Ok(skipped(rel, SkipReason::Vanished));
    }
    if !is_repo_root(&original) {
        warn!(path = rel, "candidate is no longer a working tree root, skipping");
        return Ok(skipped(rel, SkipReason::NotAWorkTree));
    }

    state = ConvertState::Confirmed;
    debug!(path = rel, state = state.as_str(), "preconditions hold");

    let url = match candidate.origin_url() {
        Some(url) => url.to_string(),
        None => {
            let line = prompts.read_line(&format!(
                "no origin known for '{rel}'; remote URL (empty to skip): "
            ))?;
            match line {
                Some(input) if !input.trim().is_empty() => input.trim().to_string(),
                _ => return Ok(skipped(rel, SkipReason::NoRemoteUrl)),
            }
        }
    };

    if ctx.dry {
        info!(path = rel, url, "dry run: would back up, clean residue, and register");
        return Ok(ConvertOutcome::DryRun {
            path: rel.to_string(),
        });
    }

    state = ConvertState::BackingUp;
    debug!(path = rel, state = state.as_str(), "moving out of working tree");
    let record = match BackupRecord::create(ctx.backup_root, ctx.parent_root, rel) {
        Ok(record) => record,
        Err(e) => {
            warn!(path = rel, error = %format!("{e:#}"), "backup failed, original left in place");
            return Ok(ConvertOutcome::RolledBack {
                path: rel.to_string(),
                error: format!("backup failed: {e:#}"),
            });
        }
    };

    state = ConvertState::CleaningResidue;
    debug!(path = rel, state = state.as_str(), "removing stale bookkeeping");
    if let Err(e) = clean_residue(ctx.parent_root, rel) {
        return Ok(roll_back(
            rel,
            &record,
            &original,
            &format!("residue cleanup failed: {e:#}"),
        ));
    }

    state = ConvertState::Registering;
    debug!(path = rel, state = state.as_str(), url, "registering submodule");
    match cmd::add_submodule(ctx.parent_root, &url, rel) {
        Ok(()) => {
            info!(
                path = rel,
                backup = %record.backup_path().display(),
                "converted; backup kept"
            );
            Ok(ConvertOutcome::Converted {
                path: rel.to_string(),
                url,
            })
        }
        Err(e) => {
            let registration = ConvertError::Registration {
                path: rel.to_string(),
                message: e.to_string(),
            };
            Ok(roll_back(rel, &record, &original, &registration.to_string()))
        }
    }
}

/// Delete whatever partial clone exists at the original path and move the
/// backup home. Reports, never panics; a failed restore keeps the backup.
fn roll_back(
    rel: &str,
    record: &BackupRecord,
    original: &Path,
    cause: &str,
) -> ConvertOutcome {
    warn!(path = rel, cause, "rolling back");

    let restore = remove_dir_if_exists(original).and_then(|()| record.restore());
    let error = match restore {
        Ok(()) => cause.to_string(),
        Err(e) => ConvertError::RollbackFailed {
            path: rel.to_string(),
            backup: record.backup_path().display().to_string(),
            message: format!("{cause}; {e:#}"),
        }
        .to_string(),
    };

    ConvertOutcome::RolledBack {
        path: rel.to_string(),
        error,
    }
}

fn skipped(rel: &str, reason: SkipReason) -> ConvertOutcome {
    ConvertOutcome::Skipped {
        path: rel.to_string(),
        reason,
    }
}

/// True when `path` is itself the root of a working tree (not merely inside
/// one).
fn is_repo_root(path: &Path) -> bool {
    path.join(".git").exists()
        && query::work_tree_root(path)
            .ok()
            .and_then(|root| root.canonicalize().ok())
            == path.canonicalize().ok()
}
