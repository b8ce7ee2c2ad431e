// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::residue::clean_residue;
use super::state::{ConvertOutcome, SkipReason};
use super::{ConvertContext, convert_batch};
use crate::git::manifest::SubmoduleManifest;
use crate::git::query;
use crate::prompt::testing::ScriptedPrompt;
use crate::scan::{CandidateRepo, ScanOptions, scan_candidates};
use crate::testutil::{
    allow_file_protocol, git, init_repo, init_repo_with_commit, set_origin, temp_dir,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

fn scan(parent: &Path) -> Vec<CandidateRepo> {
    let manifest = SubmoduleManifest::load(parent).expect("manifest load should succeed");
    scan_candidates(parent, &manifest, &ScanOptions::default()).expect("scan should succeed")
}

/// Full recursive tree snapshot: relative path -> file bytes.
fn tree_contents(root: &Path) -> BTreeMap<String, Vec<u8>> {
    fn walk(dir: &Path, base: &Path, map: &mut BTreeMap<String, Vec<u8>>) {
        for entry in fs::read_dir(dir).expect("read_dir") {
            let entry = entry.expect("dir entry");
            let path = entry.path();
            if path.is_dir() {
                walk(&path, base, map);
            } else {
                let rel = path
                    .strip_prefix(base)
                    .expect("under base")
                    .to_string_lossy()
                    .into_owned();
                map.insert(rel, fs::read(&path).expect("read file"));
            }
        }
    }
    let mut map = BTreeMap::new();
    walk(root, root, &mut map);
    map
}

#[test]
fn test_convert_success_scenario() {
    let upstream = temp_dir();
    init_repo_with_commit(upstream.path());

    let parent = temp_dir();
    init_repo_with_commit(parent.path());
    allow_file_protocol(parent.path());

    let lib_a = parent.path().join("vendor/lib-a");
    init_repo_with_commit(&lib_a);
    let upstream_url = upstream.path().display().to_string();
    set_origin(&lib_a, &upstream_url);

    init_repo(&parent.path().join("vendor/lib-b"));

    let candidates = scan(parent.path());
    let paths: Vec<_> = candidates.iter().map(|c| c.rel_path()).collect();
    assert_eq!(paths, vec!["vendor/lib-a", "vendor/lib-b"]);

    let backups = temp_dir();
    let ctx = ConvertContext {
        parent_root: parent.path(),
        backup_root: backups.path(),
        dry: false,
    };

    // Select only vendor/lib-a; Enter confirms it.
    let mut prompts = ScriptedPrompt::new(&[""]);
    let outcomes =
        convert_batch(&ctx, &candidates[..1], &mut prompts).expect("batch should run");
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].is_converted(), "got {:?}", outcomes[0]);

    // The manifest gained exactly one section for the path, with the URL.
    let manifest = SubmoduleManifest::load(parent.path()).expect("manifest load should succeed");
    assert_eq!(manifest.len(), 1);
    assert!(manifest.has_path("vendor/lib-a"));
    let url = git(
        &["config", "-f", ".gitmodules", "--get", "submodule.vendor/lib-a.url"],
        parent.path(),
    );
    assert_eq!(url, upstream_url);

    // The path now holds a fresh clone of the upstream.
    assert!(parent.path().join("vendor/lib-a/README").exists());
    assert!(
        query::is_path_tracked(parent.path(), "vendor/lib-a").expect("query should succeed")
    );

    // A backup of the original tree stays on disk.
    let backup_entries: Vec<_> = fs::read_dir(backups.path())
        .expect("read backups")
        .collect();
    assert_eq!(backup_entries.len(), 1);

    // Re-scanning returns the previous set minus the converted path.
    let rescan: Vec<_> = scan(parent.path())
        .into_iter()
        .map(|c| c.rel_path().to_string())
        .collect();
    assert_eq!(rescan, vec!["vendor/lib-b".to_string()]);
}

#[test]
fn test_convert_rollback_restores_tree_exactly() {
    let parent = temp_dir();
    init_repo_with_commit(parent.path());
    allow_file_protocol(parent.path());

    let lib_a = parent.path().join("vendor/lib-a");
    init_repo_with_commit(&lib_a);
    fs::write(lib_a.join("local-change.txt"), "uncommitted bytes").expect("write");
    // Origin points at nothing; registration must fail.
    let dead = parent.path().join("no-such-remote");
    set_origin(&lib_a, &dead.display().to_string());

    let before = tree_contents(&lib_a);

    let candidates = scan(parent.path());
    assert_eq!(candidates.len(), 1);

    let backups = temp_dir();
    let ctx = ConvertContext {
        parent_root: parent.path(),
        backup_root: backups.path(),
        dry: false,
    };
    let mut prompts = ScriptedPrompt::new(&[""]);
    let outcomes = convert_batch(&ctx, &candidates, &mut prompts).expect("batch should run");

    assert!(
        matches!(&outcomes[0], ConvertOutcome::RolledBack { .. }),
        "got {:?}",
        outcomes[0]
    );

    // Byte-for-byte identical to the pre-backup state.
    assert!(lib_a.exists(), "tree must be restored at the original path");
    assert_eq!(tree_contents(&lib_a), before);

    // No manifest section was left behind.
    let manifest = SubmoduleManifest::load(parent.path()).expect("manifest load should succeed");
    assert!(!manifest.has_path("vendor/lib-a"));
}

#[test]
fn test_clean_residue_removes_all_three_kinds() {
    let parent = temp_dir();
    init_repo_with_commit(parent.path());

    let lib_a = parent.path().join("vendor/lib-a");
    init_repo_with_commit(&lib_a);

    // Stale index gitlink from an earlier accidental `git add`.
    git(&["add", "vendor/lib-a"], parent.path());
    // Stale manifest section.
    git(
        &["config", "-f", ".gitmodules", "submodule.vendor/lib-a.path", "vendor/lib-a"],
        parent.path(),
    );
    git(
        &["config", "-f", ".gitmodules", "submodule.vendor/lib-a.url", "https://x/a.git"],
        parent.path(),
    );
    // Stale metadata directory.
    let modules = parent.path().join(".git/modules/vendor/lib-a");
    fs::create_dir_all(&modules).expect("mkdir");
    fs::write(modules.join("config"), "stale").expect("write");

    clean_residue(parent.path(), "vendor/lib-a").expect("cleanup should succeed");

    assert!(
        !query::is_path_tracked(parent.path(), "vendor/lib-a").expect("query should succeed")
    );
    let manifest = SubmoduleManifest::load(parent.path()).expect("manifest load should succeed");
    assert!(!manifest.has_path("vendor/lib-a"));
    assert!(!modules.exists());
    // The nested tree itself is untouched.
    assert!(lib_a.join("README").exists());
}

#[test]
fn test_residue_second_attempt_produces_no_duplicates() {
    let upstream = temp_dir();
    init_repo_with_commit(upstream.path());

    let parent = temp_dir();
    init_repo_with_commit(parent.path());
    allow_file_protocol(parent.path());

    let lib_a = parent.path().join("vendor/lib-a");
    init_repo_with_commit(&lib_a);
    let upstream_url = upstream.path().display().to_string();
    set_origin(&lib_a, &upstream_url);

    // Residue of a first attempt that died between backup and registration:
    // index entry, manifest section, metadata directory all present.
    git(&["add", "vendor/lib-a"], parent.path());
    git(
        &["config", "-f", ".gitmodules", "submodule.vendor/lib-a.path", "vendor/lib-a"],
        parent.path(),
    );
    git(
        &["config", "-f", ".gitmodules", "submodule.vendor/lib-a.url", &upstream_url],
        parent.path(),
    );
    fs::create_dir_all(parent.path().join(".git/modules/vendor/lib-a")).expect("mkdir");

    // Drive the converter directly at the residue-laden path.
    let candidate = CandidateRepo::new(
        "vendor/lib-a".to_string(),
        Some(upstream_url),
        crate::git::BranchLabel::Unknown,
    );
    let backups = temp_dir();
    let ctx = ConvertContext {
        parent_root: parent.path(),
        backup_root: backups.path(),
        dry: false,
    };
    let mut prompts = ScriptedPrompt::new(&[""]);
    let outcomes =
        convert_batch(&ctx, std::slice::from_ref(&candidate), &mut prompts)
            .expect("batch should run");
    assert!(outcomes[0].is_converted(), "got {:?}", outcomes[0]);

    // Exactly one manifest section and one index entry for the path.
    let manifest = SubmoduleManifest::load(parent.path()).expect("manifest load should succeed");
    assert_eq!(manifest.paths(), vec!["vendor/lib-a"]);
    let listed = git(&["ls-files", "--", "vendor/lib-a"], parent.path());
    assert_eq!(listed, "vendor/lib-a");
}

#[test]
fn test_convert_declined_leaves_everything_alone() {
    let parent = temp_dir();
    init_repo_with_commit(parent.path());
    let lib = parent.path().join("vendor/lib");
    init_repo_with_commit(&lib);
    set_origin(&lib, "https://x/lib.git");

    let candidates = scan(parent.path());
    let backups = temp_dir();
    let ctx = ConvertContext {
        parent_root: parent.path(),
        backup_root: backups.path(),
        dry: false,
    };
    let mut prompts = ScriptedPrompt::new(&["skip this one"]);
    let outcomes = convert_batch(&ctx, &candidates, &mut prompts).expect("batch should run");

    assert_eq!(
        outcomes[0],
        ConvertOutcome::Skipped {
            path: "vendor/lib".to_string(),
            reason: SkipReason::Declined,
        }
    );
    assert!(lib.join("README").exists());
    assert!(!parent.path().join(".gitmodules").exists());
}

#[test]
fn test_convert_skips_when_no_url_supplied() {
    let parent = temp_dir();
    init_repo_with_commit(parent.path());
    init_repo(&parent.path().join("vendor/no-origin"));

    let candidates = scan(parent.path());
    assert_eq!(candidates[0].origin_url(), None);

    let backups = temp_dir();
    let ctx = ConvertContext {
        parent_root: parent.path(),
        backup_root: backups.path(),
        dry: false,
    };
    // Enter confirms the item, empty URL input skips it.
    let mut prompts = ScriptedPrompt::new(&["", ""]);
    let outcomes = convert_batch(&ctx, &candidates, &mut prompts).expect("batch should run");

    assert_eq!(
        outcomes[0],
        ConvertOutcome::Skipped {
            path: "vendor/no-origin".to_string(),
            reason: SkipReason::NoRemoteUrl,
        }
    );
}

#[test]
fn test_convert_accepts_prompted_url() {
    let upstream = temp_dir();
    init_repo_with_commit(upstream.path());

    let parent = temp_dir();
    init_repo_with_commit(parent.path());
    allow_file_protocol(parent.path());
    init_repo_with_commit(&parent.path().join("vendor/no-origin"));

    let candidates = scan(parent.path());
    assert_eq!(candidates[0].origin_url(), None);

    let backups = temp_dir();
    let ctx = ConvertContext {
        parent_root: parent.path(),
        backup_root: backups.path(),
        dry: false,
    };
    let url = upstream.path().display().to_string();
    let mut prompts = ScriptedPrompt::new(&["", &url]);
    let outcomes = convert_batch(&ctx, &candidates, &mut prompts).expect("batch should run");

    assert_eq!(
        outcomes[0],
        ConvertOutcome::Converted {
            path: "vendor/no-origin".to_string(),
            url,
        }
    );
}

#[test]
fn test_convert_skips_vanished_candidate() {
    let parent = temp_dir();
    init_repo_with_commit(parent.path());

    let candidate = CandidateRepo::new(
        "vendor/ghost".to_string(),
        Some("https://x/ghost.git".to_string()),
        crate::git::BranchLabel::Unknown,
    );
    let backups = temp_dir();
    let ctx = ConvertContext {
        parent_root: parent.path(),
        backup_root: backups.path(),
        dry: false,
    };
    let mut prompts = ScriptedPrompt::new(&[""]);
    let outcomes = convert_batch(&ctx, std::slice::from_ref(&candidate), &mut prompts)
        .expect("batch should run");

    assert_eq!(
        outcomes[0],
        ConvertOutcome::Skipped {
            path: "vendor/ghost".to_string(),
            reason: SkipReason::Vanished,
        }
    );
}

#[test]
fn test_convert_dry_run_mutates_nothing() {
    let parent = temp_dir();
    init_repo_with_commit(parent.path());
    let lib = parent.path().join("vendor/lib");
    init_repo_with_commit(&lib);
    set_origin(&lib, "https://x/lib.git");

    let candidates = scan(parent.path());
    let backups = temp_dir();
    let ctx = ConvertContext {
        parent_root: parent.path(),
        backup_root: backups.path(),
        dry: true,
    };
    let mut prompts = ScriptedPrompt::new(&[""]);
    let outcomes = convert_batch(&ctx, &candidates, &mut prompts).expect("batch should run");

    assert_eq!(
        outcomes[0],
        ConvertOutcome::DryRun {
            path: "vendor/lib".to_string(),
        }
    );
    assert!(lib.join("README").exists());
    assert!(!parent.path().join(".gitmodules").exists());
    assert_eq!(
        fs::read_dir(backups.path()).expect("read backups").count(),
        0
    );
}

#[test]
fn test_batch_continues_after_item_failure() {
    let upstream = temp_dir();
    init_repo_with_commit(upstream.path());

    let parent = temp_dir();
    init_repo_with_commit(parent.path());
    allow_file_protocol(parent.path());

    // First candidate fails registration (dead remote), second succeeds.
    let bad = parent.path().join("vendor/bad");
    init_repo_with_commit(&bad);
    set_origin(&bad, &parent.path().join("missing").display().to_string());

    let good = parent.path().join("vendor/good");
    init_repo_with_commit(&good);
    set_origin(&good, &upstream.path().display().to_string());

    let candidates = scan(parent.path());
    let paths: Vec<_> = candidates.iter().map(|c| c.rel_path()).collect();
    assert_eq!(paths, vec!["vendor/bad", "vendor/good"]);

    let backups = temp_dir();
    let ctx = ConvertContext {
        parent_root: parent.path(),
        backup_root: backups.path(),
        dry: false,
    };
    let mut prompts = ScriptedPrompt::new(&["", ""]);
    let outcomes = convert_batch(&ctx, &candidates, &mut prompts).expect("batch should run");

    assert!(matches!(&outcomes[0], ConvertOutcome::RolledBack { .. }));
    assert!(outcomes[1].is_converted(), "got {:?}", outcomes[1]);

    // The failed item is back in place, the good one is registered.
    assert!(bad.join("README").exists());
    let manifest = SubmoduleManifest::load(parent.path()).expect("manifest load should succeed");
    assert_eq!(manifest.paths(), vec!["vendor/good"]);
}
