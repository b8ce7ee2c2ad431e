// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, ScanConfig};
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_file, PathBuf::from("subsume.log"));
    assert_eq!(config.tools.fzf, "fzf");
    assert!(config.scan.exclude_dirs.contains(&"node_modules".to_string()));
}

#[test]
fn test_default_exclude_dirs() {
    insta::assert_debug_snapshot!(ScanConfig::default_exclude_dirs(), @r#"
    [
        "node_modules",
        "target",
        ".hg",
        ".svn",
        "__pycache__",
        "venv",
        ".venv",
        "vendor-cache",
    ]
    "#);
}

#[test]
fn test_loader_toml_str_overrides_defaults() {
    let config = ConfigLoader::new()
        .add_toml_str(
            r#"
            [global]
            dry = true
            output_log_level = 4

            [scan]
            exclude_dirs = ["deps"]

            [tools]
            fzf = "sk"
            "#,
        )
        .build()
        .expect("config should build");

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.scan.exclude_dirs, vec!["deps".to_string()]);
    assert_eq!(config.tools.fzf, "sk");
}

#[test]
fn test_loader_set_override_wins() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\ndry = false\n")
        .set("global.dry", true)
        .expect("valid override")
        .build()
        .expect("config should build");

    assert!(config.global.dry);
}

#[test]
fn test_loader_rejects_unknown_keys() {
    let result = ConfigLoader::new()
        .add_toml_str("[global]\nno_such_key = 1\n")
        .build();
    assert!(result.is_err(), "unknown keys should be rejected");
}

#[test]
fn test_resolve_fills_backup_and_state_paths() {
    let mut config = Config::default();
    assert!(config.paths.backup_root.is_none());
    config
        .resolve_and_validate()
        .expect("resolve should succeed");
    assert!(config.paths.backup_root.is_some());
    assert!(config.paths.state_file.is_some());
}

#[test]
fn test_explicit_paths_survive_resolve() {
    let mut config = Config::default();
    config.paths.backup_root = Some(PathBuf::from("/srv/backups"));
    config
        .resolve_and_validate()
        .expect("resolve should succeed");
    assert_eq!(config.paths.backup_root(), PathBuf::from("/srv/backups"));
}

#[test]
fn test_loader_tracks_loaded_files() {
    let loader = ConfigLoader::new().add_toml_str("[global]\ndry = true\n");
    let listed = loader.format_loaded_files();
    assert_eq!(listed, vec!["1. [string] <string>".to_string()]);
}
