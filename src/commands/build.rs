//! The build command: resolve configuration, then run the task list.
use std::path::PathBuf;

use anyhow::Result;

use crate::cli::Cli;
use crate::config::BuildConfig;
use crate::logging::Logger;
use crate::tasks::{self, Context};

/// Run a full build.
///
/// Tasks execute strictly in order; the first failure aborts the run and
/// propagates to the process boundary, so the process exits non-zero with
/// the underlying error description.
///
/// # Errors
///
/// Returns an error if configuration loading or any build task fails.
pub fn run(args: &Cli, log: &Logger) -> Result<()> {
    let version = option_env!("AMPBUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("ampbuild {version}"));

    log.stage("Resolving configuration");
    let build_root = resolve_build_root(args);
    let config = BuildConfig::resolve(&build_root, args.path.as_deref())?;
    log.info(&format!("build root: {}", build_root.display()));
    log.info(&format!("source: {}", config.source_root.display()));
    log.info(&format!(
        "{} modules: {}",
        config.modules.len(),
        config.modules.join(", ")
    ));

    let ctx = Context {
        config: &config,
        log,
        dry_run: args.dry_run,
    };
    for task in tasks::all_build_tasks() {
        tasks::execute(task.as_ref(), &ctx)?;
    }

    log.print_summary();
    Ok(())
}

/// Resolve the build output root from CLI arguments.
///
/// Defaults to `build` relative to the current directory, matching the
/// layout the Amp repository uses.
#[must_use]
pub fn resolve_build_root(args: &Cli) -> PathBuf {
    args.root
        .clone()
        .unwrap_or_else(|| PathBuf::from("build"))
}
