//! Image tree mirroring.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::error::AssetError;
use crate::fsops;

/// Replace the image output directory with a fresh copy of the image
/// source tree.
///
/// The previous output directory is removed wholesale so no stale file
/// survives a previous run. The source tree is validated first; a missing
/// source never destroys the previous output.
#[derive(Debug)]
pub struct MirrorImages;

impl Task for MirrorImages {
    fn name(&self) -> &str {
        "Mirror images"
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        let src = ctx.config.image_dir();
        let dst = &ctx.config.outputs.images;

        if ctx.dry_run {
            if !src.is_dir() {
                return Err(AssetError::MissingSourceTree { path: src }.into());
            }
            ctx.log.dry_run(&format!(
                "would replace {} with a copy of {}",
                dst.display(),
                src.display()
            ));
            return Ok(TaskResult::DryRun);
        }

        let copied = fsops::mirror_dir(&src, dst)?;
        ctx.log
            .info(&format!("{copied} files mirrored to {}", dst.display()));
        Ok(TaskResult::Ok)
    }
}
