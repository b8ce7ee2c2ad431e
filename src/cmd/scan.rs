// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scan command implementation: non-interactive candidate listing.

use colored::Colorize;
use tracing::info;

use crate::cli::scan::ScanArgs;
use crate::config::Config;
use crate::error::{GitError, Result};
use crate::git::manifest::SubmoduleManifest;
use crate::git::query;
use crate::scan::{ScanOptions, scan_candidates};

/// Main handler for the scan command.
///
/// # Errors
///
/// Returns an error if the path is not inside a working tree or the scan
/// fails.
pub fn run_scan_command(args: &ScanArgs, config: &Config) -> Result<()> {
    let start = match &args.path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    if !query::is_git_repo(&start) {
        return Err(GitError::NotAWorkTree {
            path: start.display().to_string(),
        }
        .into());
    }

    let parent_root = query::work_tree_root(&start)?;
    info!(root = %parent_root.display(), "scanning");

    let manifest = SubmoduleManifest::load(&parent_root)?;
    let options = ScanOptions::from_config(&config.scan);
    let candidates = scan_candidates(&parent_root, &manifest, &options)?;

    if candidates.is_empty() {
        println!("{}", "no nested repositories found".yellow());
        return Ok(());
    }

    for candidate in &candidates {
        println!(
            "{:40} {:50} {}",
            candidate.rel_path(),
            candidate.origin_display(),
            candidate.branch()
        );
    }
    println!("{}", format!("{} candidate(s)", candidates.len()).bold());
    Ok(())
}
