// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Candidate model: a nested repository eligible for conversion.

use crate::git::BranchLabel;

/// A nested Git repository found inside the parent's working tree and not
/// yet registered as a submodule.
///
/// The origin URL and branch label are informational only; neither is used
/// for filtering. Candidates are recomputed on every scan and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRepo {
    rel_path: String,
    origin_url: Option<String>,
    branch: BranchLabel,
}

impl CandidateRepo {
    #[must_use]
    pub const fn new(rel_path: String, origin_url: Option<String>, branch: BranchLabel) -> Self {
        Self {
            rel_path,
            origin_url,
            branch,
        }
    }

    /// Path relative to the parent root.
    #[must_use]
    pub fn rel_path(&self) -> &str {
        &self.rel_path
    }

    /// The `origin` remote URL, if the candidate has one.
    #[must_use]
    pub fn origin_url(&self) -> Option<&str> {
        self.origin_url.as_deref()
    }

    /// Origin URL for display; "unknown" when absent.
    #[must_use]
    pub fn origin_display(&self) -> &str {
        self.origin_url.as_deref().unwrap_or("unknown")
    }

    /// Branch label (named, `detached@<hash>`, or unknown).
    #[must_use]
    pub const fn branch(&self) -> &BranchLabel {
        &self.branch
    }

    /// Tab-separated row for the selection UI: `path<TAB>url<TAB>branch`.
    #[must_use]
    pub fn row(&self) -> String {
        format!("{}\t{}\t{}", self.rel_path, self.origin_display(), self.branch)
    }
}
