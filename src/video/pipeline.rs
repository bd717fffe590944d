// src/video/pipeline.rs

//! Normalize-then-concatenate merge pipeline.
//!
//! Source videos come in arbitrary resolutions and frame rates; feeding
//! them straight into a concat produces a fragmented, unplayable output.
//! Every file is therefore re-encoded to one target size first. That pass
//! is a hard requirement of this pipeline, not an optimization.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::VideoSettings;
use crate::errors::{Result, ToolbeltError};
use crate::exec::{CommandRunner, ExecRequest};
use crate::video::assets::{VideoAsset, discover_assets};
use crate::video::workspace::MergeWorkspace;

/// Merge the numbered videos in `folder` into one `merged.mp4`.
///
/// Any single re-encode or concat failure aborts the whole run with the
/// transcoder's captured output; partial state in the temp directory is
/// wiped by the next run's [`MergeWorkspace::prepare`].
pub async fn merge_videos(
    runner: &dyn CommandRunner,
    settings: &VideoSettings,
    folder: &Path,
) -> Result<()> {
    let folder = fs::canonicalize(folder)?;
    info!(folder = %folder.display(), "merging videos");

    let assets = discover_assets(&folder)?;
    if assets.is_empty() {
        return Err(ToolbeltError::PipelineError(format!(
            "no numbered .mp4 files found in {}",
            folder.display()
        )));
    }

    let workspace = MergeWorkspace::new(&folder);
    workspace.prepare()?;

    // Strictly sequential: the concat step assumes every prior
    // normalization already finished.
    for asset in &assets {
        normalize_video(runner, settings, asset).await?;
    }

    concatenate(runner, settings, &assets, &workspace).await?;
    workspace.cleanup()?;

    info!(output = %workspace.output_file.display(), "merged videos");
    Ok(())
}

/// Re-encode one video to the target size, writing back to its own name.
async fn normalize_video(
    runner: &dyn CommandRunner,
    settings: &VideoSettings,
    asset: &VideoAsset,
) -> Result<()> {
    let file_name = asset
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ToolbeltError::PipelineError(format!("non-UTF-8 video path {}", asset.path.display()))
        })?;

    info!(video = file_name, size = %settings.target_size, "normalizing video");

    // Move the original aside so the re-encode can write to its name.
    let temp_path = asset.path.with_file_name(format!("temp-{file_name}"));
    fs::rename(&asset.path, &temp_path)?;

    // ffmpeg reports progress on stderr, so only the exit status decides
    // success here.
    let cmd = format!(
        "ffmpeg -y -i \"{}\" -c:v {} -s {} \"{}\"",
        temp_path.display(),
        settings.codec,
        settings.target_size,
        asset.path.display(),
    );
    let result = runner.run(ExecRequest::new(cmd).allow_stderr()).await;
    if !result.completed {
        return Err(ToolbeltError::PipelineError(format!(
            "re-encoding {file_name} failed:\n{}",
            result.output
        )));
    }

    fs::remove_file(&temp_path)?;
    Ok(())
}

/// Feed all normalized videos, in sorted order, into one concat invocation.
async fn concatenate(
    runner: &dyn CommandRunner,
    settings: &VideoSettings,
    assets: &[VideoAsset],
    workspace: &MergeWorkspace,
) -> Result<()> {
    info!(count = assets.len(), "concatenating videos");

    let mut cmd = String::from("ffmpeg -y");
    for asset in assets {
        cmd.push_str(&format!(" -i \"{}\"", asset.path.display()));
    }
    // The output frame rate has to be pinned, otherwise ffmpeg picks one per
    // segment and the result fragments.
    cmd.push_str(&format!(
        " -filter_complex \"concat=n={}:v=1:a=1 [v] [a]\" -map \"[v]\" -map \"[a]\" -c:v {} -r {} \"{}\"",
        assets.len(),
        settings.codec,
        settings.fps,
        workspace.output_file.display(),
    ));

    let request = ExecRequest::new(cmd)
        .allow_stderr()
        .working_dir(&workspace.temp_dir);
    let result = runner.run(request).await;
    if !result.completed {
        return Err(ToolbeltError::PipelineError(format!(
            "merging videos failed:\n{}",
            result.output
        )));
    }
    Ok(())
}
