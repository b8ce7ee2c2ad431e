// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for subsume using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! subsume [global options] [command]
//! convert [PATH]     interactive converter (the default command)
//! scan [PATH]        list candidates, non-interactive
//! options            dump merged configuration
//! files              list loaded config files
//! version
//! ```

pub mod convert;
pub mod global;
pub mod scan;

#[cfg(test)]
mod tests;

use crate::cli::convert::ConvertArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::scan::ScanArgs;
use clap::{Parser, Subcommand};

/// Nested Git Repository Converter
///
/// Finds nested Git repositories inside a parent working tree and converts
/// selected ones into submodules.
#[derive(Debug, Parser)]
#[command(
    name = "subsume",
    author,
    version,
    about = "Converts nested Git repositories into submodules",
    long_about = "subsume Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Scans a parent Git repository for nested repositories and\n\
                  interactively converts selected ones into submodules, with a\n\
                  backup taken before and a rollback after any failed attempt.\n\
                  Invoking `subsume` with no command starts the converter.",
    after_help = "CONFIG FILES:\n\n\
                  By default, subsume loads `subsume.toml` from the current\n\
                  directory if present. Additional files can be specified with\n\
                  --config; those are loaded afterwards and override it.\n\
                  SUBSUME_* environment variables and --set overrides are\n\
                  applied last. Use --no-default-config to disable the\n\
                  auto-loaded file and only use --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the merged configuration.
    Options,

    /// Lists the config files used by subsume.
    Files,

    /// Scans for nested repositories and prints the candidates.
    Scan(ScanArgs),

    /// Converts nested repositories into submodules (the default).
    Convert(ConvertArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
