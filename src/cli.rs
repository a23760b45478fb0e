//! Command-line surface for the asset build helper.
use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI entry point for the asset build helper.
///
/// There are no subcommands — invoking the binary runs one build.
#[derive(Parser, Debug)]
#[command(
    name = "ampbuild",
    about = "Asset build helper for the Amp UI widget library",
    version
)]
pub struct Cli {
    /// Location of the Amp source files, relative to the build root
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Override the build output directory
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Preview changes without applying
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
