// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Convert command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `convert` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ConvertArgs {
    /// Starting directory. Prompted for interactively (seeded with the last
    /// used directory) when omitted or invalid.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}
