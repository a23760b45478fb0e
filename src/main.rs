//! Binary entry point for the `ampbuild` CLI.
use anyhow::Result;
use clap::Parser;

use ampbuild::cli::Cli;
use ampbuild::commands;
use ampbuild::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose, "build");
    let log = Logger::new("build");

    commands::build::run(&args, &log)
}
