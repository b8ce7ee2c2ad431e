// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Convert (default) | Scan | Options | Files | Version
//! ```

use std::process::ExitCode;

use colored::Colorize;

use subsume::cli::global::GlobalOptions;
use subsume::cli::{self, Command};
use subsume::cmd::config::{run_files_command, run_options_command};
use subsume::cmd::convert::run_convert_command;
use subsume::cmd::scan::run_scan_command;
use subsume::config::Config;
use subsume::config::loader::ConfigLoader;
use subsume::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_config_loader(global: &GlobalOptions) -> subsume::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional("subsume.toml");
    }
    for file in &global.configs {
        loader = loader.add_toml_file(file);
    }
    loader = loader.with_env_prefix("SUBSUME");
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(&key, value.as_str())?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> subsume::error::Result<Config> {
    build_config_loader(global)?.build()
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .with_log_file(config.global.log_file.clone())
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let dry = cli.global.dry || config.global.dry;

    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Options) => run_options_command(config),
        Some(Command::Files) => match build_config_loader(&cli.global) {
            Ok(loader) => {
                run_files_command(&loader.format_loaded_files());
                Ok(())
            }
            Err(e) => Err(e),
        },
        Some(Command::Scan(args)) => run_scan_command(args, config),
        Some(Command::Convert(args)) => run_convert_command(args, config, dry),
        // Bare invocation starts the converter.
        None => run_convert_command(&subsume::cli::convert::ConvertArgs::default(), config, dry),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {e:#}").red().bold());
            eprintln!(
                "{}",
                format!("see {} for details", config.global.log_file.display()).dimmed()
            );
            ExitCode::FAILURE
        }
    }
}
