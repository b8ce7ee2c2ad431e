// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Convert command implementation: the outer orchestration loop.
//!
//! ```text
//! resolve start dir (prompt until valid, seeded by last-used path)
//!        |
//!        v
//! locate parent root ----------- fatal if missing (defensive)
//!        |
//!        v
//! dirty-tree gate (opt-in) ----> back to resolver on decline
//!        |
//!        v
//! scan -> select -> convert batch -> summary
//!        |
//!        v
//! [r]escan | [c]hange directory | [q]uit
//! ```
//!
//! The loop has no termination besides explicit quit or end of input on the
//! prompt channel.

use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::cli::convert::ConvertArgs;
use crate::config::Config;
use crate::convert::{ConvertContext, ConvertOutcome, convert_batch};
use crate::error::{Result, bail_out};
use crate::git::manifest::SubmoduleManifest;
use crate::git::query;
use crate::prompt::{FzfSelector, InteractiveSelector, PromptProvider, TtyPrompt};
use crate::scan::{CandidateRepo, ScanOptions, scan_candidates};
use crate::state::{JsonFileStore, MemoryStore, StateStore};

/// First field of the synthetic select-all row.
const ALL_KEY: &str = "ALL";

/// Main handler for the convert command.
///
/// Wires the production capabilities (tty prompts, fzf selector, JSON state
/// store) and runs the loop. Missing external tools are fatal here, before
/// any interaction starts.
///
/// # Errors
///
/// Returns an error if a required tool is missing, the terminal is
/// unavailable, or the loop fails.
pub fn run_convert_command(args: &ConvertArgs, config: &Config, dry: bool) -> Result<()> {
    which::which("git").map_err(|_| bail_out("git not found in PATH"))?;
    let mut selector = FzfSelector::locate(&config.tools.fzf)?;
    let mut prompts = TtyPrompt::new()?;

    let mut store: Box<dyn StateStore> = match config.paths.state_file() {
        Some(file) => Box::new(JsonFileStore::new(file.to_path_buf())),
        None => Box::new(MemoryStore::default()),
    };

    run_convert_loop(
        config,
        args.path.clone(),
        &mut prompts,
        &mut selector,
        store.as_mut(),
        dry,
    )
}

/// The orchestration loop, decoupled from the production capabilities so a
/// scripted prompt provider and a static selector can drive it in tests.
///
/// # Errors
///
/// Returns an error if the prompt channel fails or the parent root cannot
/// be located.
pub fn run_convert_loop(
    config: &Config,
    initial: Option<PathBuf>,
    prompts: &mut dyn PromptProvider,
    selector: &mut dyn InteractiveSelector,
    store: &mut dyn StateStore,
    dry: bool,
) -> Result<()> {
    let backup_root = config.paths.backup_root();
    let options = ScanOptions::from_config(&config.scan);
    // First resolution is seeded (argument > last-used path > cwd) and
    // validated silently; after "change directory" the resolver prompts.
    let mut initial = initial
        .or_else(|| store.load_last_path())
        .or_else(|| std::env::current_dir().ok());

    'resolve: loop {
        let Some(start) = resolve_start_dir(initial.take(), store, prompts)? else {
            info!("end of input, leaving");
            return Ok(());
        };
        let parent_root = locate_parent_root(&start)?;
        print_info(&format!("parent repository: {}", parent_root.display()));

        loop {
            // A failed or partial conversion is harder to reason about on
            // top of a dirty tree; make the operator opt in.
            match query::has_uncommitted_changes(&parent_root) {
                Ok(true) => {
                    print_warning("parent working tree has uncommitted changes");
                    if !prompts.confirm("continue on a dirty tree?", false)? {
                        continue 'resolve;
                    }
                }
                Ok(false) => {}
                Err(e) => warn!(error = %e, "could not check working tree status"),
            }

            let manifest = SubmoduleManifest::load(&parent_root)?;
            let candidates = scan_candidates(&parent_root, &manifest, &options)?;
            let chosen = select_candidates(&candidates, prompts, selector)?;

            if chosen.is_empty() {
                print_info("nothing selected");
            } else {
                let ctx = ConvertContext {
                    parent_root: &parent_root,
                    backup_root: &backup_root,
                    dry,
                };
                let outcomes = convert_batch(&ctx, &chosen, prompts)?;
                print_summary(&outcomes, &config.global.log_file);
            }

            loop {
                match prompts.read_line("[r]escan, [c]hange directory, [q]uit: ")? {
                    None => return Ok(()),
                    Some(choice) => match choice.trim().to_lowercase().as_str() {
                        "" | "r" => break,
                        "c" => continue 'resolve,
                        "q" => return Ok(()),
                        _ => print_warning("unrecognized choice"),
                    },
                }
            }
        }
    }
}

/// Prompt until a path exists and lies inside a working tree. A seed path,
/// when given, is validated silently first. The validated path is persisted
/// as the next run's seed. `Ok(None)` means end of input.
fn resolve_start_dir(
    seed: Option<PathBuf>,
    store: &mut dyn StateStore,
    prompts: &mut dyn PromptProvider,
) -> Result<Option<PathBuf>> {
    let mut candidate = seed;

    loop {
        if let Some(path) = candidate.take() {
            if path.exists() && query::is_git_repo(&path) {
                let resolved = path.canonicalize().unwrap_or(path);
                if let Err(e) = store.save_last_path(&resolved) {
                    // Persistence failures must never block the run.
                    warn!(error = %format!("{e:#}"), "could not persist start directory");
                }
                return Ok(Some(resolved));
            }
            print_warning(&format!(
                "{} does not exist or is not inside a git working tree",
                path.display()
            ));
        }

        let hint = store
            .load_last_path()
            .map(|p| format!(" [{}]", p.display()))
            .unwrap_or_default();
        match prompts.read_line(&format!("start directory{hint}: "))? {
            None => return Ok(None),
            Some(line) => {
                let line = line.trim();
                // Empty input takes the hinted last-used path, if any.
                candidate = if line.is_empty() {
                    store.load_last_path()
                } else {
                    Some(PathBuf::from(line))
                };
            }
        }
    }
}

/// Top-level root of the repository containing `start`. Unreachable failure
/// given the resolver's precondition, checked anyway.
fn locate_parent_root(start: &Path) -> Result<PathBuf> {
    match query::work_tree_root(start) {
        Ok(root) => Ok(root.canonicalize().unwrap_or(root)),
        Err(e) => Err(bail_out(format!(
            "no enclosing working tree for {}: {e}",
            start.display()
        ))
        .into()),
    }
}

/// Candidate selection policy: empty list reports and selects nothing, a
/// single candidate asks a yes/no question, multiple candidates go through
/// the fuzzy selector with a synthetic ALL row. Returns chosen candidates
/// in scanner order.
pub(crate) fn select_candidates(
    candidates: &[CandidateRepo],
    prompts: &mut dyn PromptProvider,
    selector: &mut dyn InteractiveSelector,
) -> Result<Vec<CandidateRepo>> {
    match candidates {
        [] => {
            print_info("no candidates found");
            Ok(Vec::new())
        }
        [only] => {
            let question = format!(
                "found '{}' ({}). continue?",
                only.rel_path(),
                only.origin_display()
            );
            if prompts.confirm(&question, true)? {
                Ok(vec![only.clone()])
            } else {
                Ok(Vec::new())
            }
        }
        _ => {
            let all_row = format!("{ALL_KEY}\t(every candidate)\t-");
            let mut rows = Vec::with_capacity(candidates.len() + 1);
            rows.push(all_row.clone());
            rows.extend(candidates.iter().map(CandidateRepo::row));

            let picked = selector.select(&rows)?;
            if picked.iter().any(|row| row == &all_row) {
                return Ok(candidates.to_vec());
            }

            let picked: std::collections::BTreeSet<String> = picked.into_iter().collect();
            Ok(candidates
                .iter()
                .filter(|candidate| picked.contains(&candidate.row()))
                .cloned()
                .collect())
        }
    }
}

fn print_summary(outcomes: &[ConvertOutcome], log_file: &Path) {
    println!("{}", "conversion results:".bold());
    for outcome in outcomes {
        let line = outcome.to_string();
        match outcome {
            ConvertOutcome::Converted { .. } => println!("  {}", line.green()),
            ConvertOutcome::Skipped { .. } => println!("  {}", line.yellow()),
            ConvertOutcome::RolledBack { .. } => println!("  {}", line.red()),
            ConvertOutcome::DryRun { .. } => println!("  {}", line.cyan()),
        }
    }
    if outcomes
        .iter()
        .any(|outcome| matches!(outcome, ConvertOutcome::RolledBack { .. }))
    {
        println!(
            "{}",
            format!("see {} for details", log_file.display()).dimmed()
        );
    }
}

fn print_info(message: &str) {
    println!("{}", message.cyan());
}

fn print_warning(message: &str) {
    println!("{}", message.yellow().bold());
}
