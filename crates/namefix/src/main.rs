//! namefix command-line tool

use anyhow::Result;
use clap::Parser;
use namefix::config::{Config, CONFIG_FILENAME};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::*;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Preview { recursive, folders, format } => {
            let config = load_config(&cli.dir, recursive, folders);
            preview_changes(&config, format)
        }
        Commands::Apply { recursive, folders } => {
            let config = load_config(&cli.dir, recursive, folders);
            apply_changes(&config)
        }
        Commands::Check { names } => check_names(&names),
    };

    if let Err(e) = result {
        namefix::theme::print_error("Command failed", &e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(dir: &Path, recursive: bool, folders: bool) -> Config {
    match Config::load(dir) {
        Ok(config) => config.with_flags(recursive, folders),
        Err(e) => {
            namefix::theme::print_error_with_suggestion(
                "Failed to load configuration",
                &e,
                &format!("Check '{}' in '{}'", CONFIG_FILENAME, dir.display()),
            );
            std::process::exit(1);
        }
    }
}
