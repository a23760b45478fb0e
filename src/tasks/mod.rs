//! Sequential build tasks that produce the combined outputs.
//!
//! A build runs the tasks returned by [`all_build_tasks`] strictly in
//! order; the first failing task aborts the run (no recovery, no retry,
//! no partial-success state).

pub mod images;
pub mod scripts;
pub mod stylesheets;

use anyhow::Result;

use crate::config::BuildConfig;
use crate::logging::{Logger, TaskStatus};

/// Shared context for task execution.
#[derive(Debug)]
pub struct Context<'a> {
    /// Resolved build configuration.
    pub config: &'a BuildConfig,
    /// Logger for output and task recording.
    pub log: &'a Logger,
    /// Whether to preview changes without applying them.
    pub dry_run: bool,
}

/// Outcome of a task that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskResult {
    /// The task applied its changes.
    Ok,
    /// The task previewed its changes (dry-run mode).
    DryRun,
}

/// A named, executable build step.
pub trait Task {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if a required input is missing or unreadable, or
    /// an output cannot be written.
    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult>;
}

/// The complete set of tasks run by a build, in execution order.
#[must_use]
pub fn all_build_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(stylesheets::ConcatStylesheets),
        Box::new(scripts::ConcatScripts),
        Box::new(images::MirrorImages),
    ]
}

/// Execute a task, recording the result in the logger.
///
/// # Errors
///
/// Propagates the task's error unchanged after recording it, so the
/// caller aborts the run and the process exits non-zero.
pub fn execute(task: &dyn Task, ctx: &Context<'_>) -> Result<()> {
    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
            Ok(())
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
            Ok(())
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
            Err(e)
        }
    }
}
