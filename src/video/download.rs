// src/video/download.rs

//! Series downloads: every URL of a series fetched into a numbered file.

use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use tracing::info;

use crate::config::VideoSeries;
use crate::errors::Result;

/// How one series' downloads are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadMode {
    /// All files in flight at once, joined at the end.
    Parallel,
    /// One file at a time, in URL order.
    Sequential,
}

/// Download every configured series into its own folder under `base_dir`.
///
/// Files are named `1.mp4`, `2.mp4`, ... in URL order so the merge pipeline
/// can pick them up directly. Returns the created folder paths in series
/// order.
pub async fn download_series(
    series: &[VideoSeries],
    base_dir: &Path,
    mode: DownloadMode,
) -> Result<Vec<PathBuf>> {
    let mut folders = Vec::new();

    for s in series {
        let folder = base_dir.join(&s.title);
        info!(folder = %folder.display(), "creating series folder");
        std::fs::create_dir_all(&folder)?;

        match mode {
            DownloadMode::Parallel => {
                let mut set = JoinSet::new();
                for (index, url) in s.urls.iter().enumerate() {
                    let dest = folder.join(format!("{}.mp4", index + 1));
                    let url = url.clone();
                    set.spawn(async move { download_file(&url, &dest).await });
                }
                while let Some(joined) = set.join_next().await {
                    joined.map_err(anyhow::Error::from)??;
                }
            }
            DownloadMode::Sequential => {
                for (index, url) in s.urls.iter().enumerate() {
                    let dest = folder.join(format!("{}.mp4", index + 1));
                    download_file(url, &dest).await?;
                }
            }
        }

        folders.push(folder);
    }

    Ok(folders)
}

async fn download_file(url: &str, dest: &Path) -> Result<()> {
    info!(url, dest = %dest.display(), "downloading video");
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    tokio::fs::write(dest, &bytes).await?;
    info!(dest = %dest.display(), "downloaded video");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_series_creates_its_folder_and_nothing_else() {
        let dir = tempfile::tempdir().unwrap();
        let series = vec![VideoSeries {
            title: "lectures".to_string(),
            urls: vec![],
        }];

        let folders = download_series(&series, dir.path(), DownloadMode::Parallel)
            .await
            .unwrap();

        assert_eq!(folders, vec![dir.path().join("lectures")]);
        assert!(folders[0].is_dir());
        assert_eq!(std::fs::read_dir(&folders[0]).unwrap().count(), 0);
    }
}
