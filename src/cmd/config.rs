// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration dump commands.

use crate::config::Config;
use crate::error::Result;

/// Print the merged configuration.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn run_options_command(config: &Config) -> Result<()> {
    let rendered = serde_json::to_string_pretty(config)?;
    println!("{rendered}");
    Ok(())
}

/// Print the list of loaded configuration files.
pub fn run_files_command(lines: &[String]) {
    if lines.is_empty() {
        println!("no config files loaded (defaults only)");
        return;
    }
    for line in lines {
        println!("{line}");
    }
}
