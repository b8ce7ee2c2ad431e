// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! convert   interactive orchestration loop (resolver -> scan -> select ->
//!           batch -> rescan/change-dir/quit)
//! scan      non-interactive candidate listing
//! config    options/files dumps
//! ```

pub mod config;
pub mod convert;
pub mod scan;
