// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_bare_invocation_defaults_to_no_command() {
    let cli = Cli::try_parse_from(["subsume"]).expect("bare invocation parses");
    assert!(cli.command.is_none());
    assert!(!cli.global.dry);
}

#[test]
fn test_parse_convert_with_path() {
    let cli = Cli::try_parse_from(["subsume", "convert", "/work/app"]).expect("parses");
    match cli.command {
        Some(Command::Convert(args)) => {
            assert_eq!(args.path, Some(PathBuf::from("/work/app")));
        }
        other => panic!("expected convert command, got {other:?}"),
    }
}

#[test]
fn test_parse_scan_without_path() {
    let cli = Cli::try_parse_from(["subsume", "scan"]).expect("parses");
    match cli.command {
        Some(Command::Scan(args)) => assert_eq!(args.path, None),
        other => panic!("expected scan command, got {other:?}"),
    }
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "subsume",
        "--dry",
        "--log-level",
        "4",
        "--log-file",
        "out.log",
        "--config",
        "a.toml",
        "--config",
        "b.toml",
        "--set",
        "tools.fzf=sk",
        "scan",
    ])
    .expect("parses");

    assert!(cli.global.dry);
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.log_file, Some(PathBuf::from("out.log")));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.options, vec!["tools.fzf=sk".to_string()]);
}

#[test]
fn test_log_level_out_of_range_is_rejected() {
    assert!(Cli::try_parse_from(["subsume", "--log-level", "6"]).is_err());
}

#[test]
fn test_to_config_overrides_mapping() {
    let cli = Cli::try_parse_from([
        "subsume",
        "--dry",
        "--log-level",
        "2",
        "--set",
        "global.log_file=custom.log",
    ])
    .expect("parses");

    let overrides = cli.global.to_config_overrides();
    insta::assert_debug_snapshot!(overrides, @r#"
    [
        (
            "global.log_file",
            "custom.log",
        ),
        (
            "global.output_log_level",
            "2",
        ),
        (
            "global.file_log_level",
            "2",
        ),
        (
            "global.dry",
            "true",
        ),
    ]
    "#);
}

#[test]
fn test_file_log_level_falls_back_to_log_level() {
    let cli = Cli::try_parse_from(["subsume", "--file-log-level", "5"]).expect("parses");
    let overrides = cli.global.to_config_overrides();
    assert!(
        overrides.contains(&("global.file_log_level".to_string(), "5".to_string())),
        "got {overrides:?}"
    );
    assert!(
        !overrides
            .iter()
            .any(|(key, _)| key == "global.output_log_level"),
        "console level must stay unset: {overrides:?}"
    );
}
