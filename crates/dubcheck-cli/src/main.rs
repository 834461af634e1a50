//! dubcheck CLI
//!
//! Prints the include paths and compiler flags derived from the nearest
//! DUB manifest, either as a ready-to-use argument list (one per line,
//! include paths as `-I<dir>`) or as a JSON object for tooling.

mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use dubcheck_core::{CheckConfig, Settings, derive_once};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let settings = Settings {
        configuration: cli.configuration,
        ..Settings::default()
    };

    match derive_once(&cli.dir, &settings)? {
        Some(config) => print_config(&config, cli.json),
        None => {
            // No manifest anywhere in the ancestor chain: nothing to emit,
            // and not an error.
            tracing::debug!(dir = ?cli.dir, "no manifest found");
            Ok(())
        }
    }
}

fn print_config(config: &CheckConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }
    for path in &config.include_paths {
        println!("-I{}", path.display());
    }
    for flag in &config.flags {
        println!("{flag}");
    }
    Ok(())
}
