// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scan command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// Directory inside the parent repository to scan. Defaults to the
    /// current directory. Non-interactive; prints candidates and exits.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}
