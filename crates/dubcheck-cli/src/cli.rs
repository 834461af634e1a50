//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Derive D compiler include paths and flags from the nearest DUB manifest
#[derive(Parser, Debug)]
#[command(name = "dubcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to start the manifest search from
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Manifest configuration block to use
    #[arg(short, long, env = "DUBCHECK_CONFIGURATION")]
    pub configuration: Option<String>,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
