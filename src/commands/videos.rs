// src/commands/videos.rs

//! Video download and merge entry points.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::load_video_config;
use crate::errors::Result;
use crate::exec::CommandRunner;
use crate::video::download::{DownloadMode, download_series};
use crate::video::pipeline::merge_videos;

/// Download every series configured in `videos.toml` into the current
/// directory. Returns the created series folders.
pub async fn download_videos(mode: DownloadMode) -> Result<Vec<PathBuf>> {
    let cwd = std::env::current_dir()?;
    let config = load_video_config(&cwd)?;
    if config.series.is_empty() {
        info!("No video series configured in videos.toml; nothing to download.");
        return Ok(Vec::new());
    }
    download_series(&config.series, &cwd, mode).await
}

pub async fn merge_videos_in(runner: &dyn CommandRunner, folder: &Path) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = load_video_config(&cwd)?;
    merge_videos(runner, &config.settings, folder).await
}

pub async fn download_and_merge_videos(runner: &dyn CommandRunner) -> Result<()> {
    let folders = download_videos(DownloadMode::Parallel).await?;
    for folder in folders {
        merge_videos_in(runner, &folder).await?;
        info!("Merged videos in {}", folder.display());
    }
    Ok(())
}

/// Merge every folder in the current directory, skipping the ones that
/// fail so one bad folder doesn't stop the batch.
pub async fn merge_all_videos(runner: &dyn CommandRunner) -> Result<()> {
    let cwd = std::env::current_dir()?;
    for entry in std::fs::read_dir(&cwd)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let folder = entry.path();
        match merge_videos_in(runner, &folder).await {
            Ok(()) => info!("Merged videos in {}", folder.display()),
            Err(err) => {
                error!("Error merging videos in {}: {err}", folder.display());
                info!("Trying next folder...");
            }
        }
    }
    Ok(())
}
