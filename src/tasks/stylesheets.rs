//! Combined stylesheet production.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::concat::{self, is_import_directive};
use crate::fsops;

/// Concatenate per-module stylesheet fragments into the combined
/// stylesheet, dropping import-directive lines.
///
/// The output is an intermediate: a downstream stylesheet compiler turns
/// it into the final CSS. Import directives are dropped because the
/// combined output already inlines every module.
#[derive(Debug)]
pub struct ConcatStylesheets;

impl Task for ConcatStylesheets {
    fn name(&self) -> &str {
        "Concatenate stylesheets"
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        let fragments = ctx.config.stylesheet_fragments();
        let combined = concat::concatenate(&fragments, Some(is_import_directive))?;
        let out = &ctx.config.outputs.stylesheet;

        if ctx.dry_run {
            ctx.log.dry_run(&format!(
                "would write {} bytes to {}",
                combined.len(),
                out.display()
            ));
            return Ok(TaskResult::DryRun);
        }

        fsops::write_atomic(out, &combined)?;
        ctx.log.info(&format!(
            "{} modules -> {} ({} bytes)",
            fragments.len(),
            out.display(),
            combined.len()
        ));
        Ok(TaskResult::Ok)
    }
}
