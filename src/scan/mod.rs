// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Nested-repository scanning.
//!
//! ```text
//! parent_root/
//!   vendor/
//!     lib-a/.git/        (candidate)
//!     lib-b/.git         (candidate, gitfile)
//!   node_modules/        (pruned, never descended)
//!     dep/.git/
//!   registered/.git      (excluded, listed in .gitmodules)
//!   .git/                (pruned, parent metadata)
//! ```
//!
//! Returns candidates sorted by relative path for deterministic ordering.
//! Re-scanning after a conversion never re-offers the converted path:
//! `.gitmodules` entries are excluded, so the scan is idempotent with
//! respect to prior conversions.

pub mod candidate;
pub mod scanner;

pub use candidate::CandidateRepo;
pub use scanner::{ScanOptions, scan_candidates};
