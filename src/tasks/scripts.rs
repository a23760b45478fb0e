//! Combined script production.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::concat;
use crate::fsops;

/// Concatenate per-module script fragments into the combined script,
/// byte-for-byte in module order, with no separators inserted.
#[derive(Debug)]
pub struct ConcatScripts;

impl Task for ConcatScripts {
    fn name(&self) -> &str {
        "Concatenate scripts"
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        let fragments = ctx.config.script_fragments();
        let combined = concat::concatenate(&fragments, None)?;
        let out = &ctx.config.outputs.script;

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

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tasks::test_helpers::{Site, test_logger, write_manifest};

    #[test]
    fn concatenates_raw_contents_without_separators() {
        let site = Site::new();
        write_manifest(&site.source_root(), &["a", "b"]);
        site.write("src/js/a.js", b"var a=1;");
        site.write("src/js/b.js", b"var b=2;");
        let config = site.config();
        let log = test_logger();
        let ctx = Context {
            config: &config,
            log: &log,
            dry_run: false,
        };

        let result = ConcatScripts.run(&ctx).unwrap();

        assert_eq!(result, TaskResult::Ok);
        let combined = std::fs::read(&config.outputs.script).unwrap();
        assert_eq!(combined, b"var a=1;var b=2;");
    }

    #[test]
    fn script_content_is_copied_verbatim_including_imports() {
        let site = Site::new();
        write_manifest(&site.source_root(), &["a"]);
        site.write("src/js/a.js", b"@import looks like css but is kept\n");
        let config = site.config();
        let log = test_logger();
        let ctx = Context {
            config: &config,
            log: &log,
            dry_run: false,
        };

        ConcatScripts.run(&ctx).unwrap();

        let combined = std::fs::read(&config.outputs.script).unwrap();
        assert_eq!(combined, b"@import looks like css but is kept\n");
    }

    #[test]
    fn missing_script_fragment_fails() {
        let site = Site::new();
        write_manifest(&site.source_root(), &["a"]);
        let config = site.config();
        let log = test_logger();
        let ctx = Context {
            config: &config,
            log: &log,
            dry_run: false,
        };

        let err = ConcatScripts.run(&ctx).expect_err("a.js is missing");
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let site = Site::new();
        write_manifest(&site.source_root(), &["a"]);
        site.write("src/js/a.js", b"var a=1;");
        let config = site.config();
        let log = test_logger();
        let ctx = Context {
            config: &config,
            log: &log,
            dry_run: true,
        };

        let result = ConcatScripts.run(&ctx).unwrap();

        assert_eq!(result, TaskResult::DryRun);
        assert!(!config.outputs.script.exists());
    }
}
