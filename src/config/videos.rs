// src/config/videos.rs

//! `videos.toml` loader: download series plus encoder settings.

use std::path::Path;

use serde::Deserialize;

use crate::errors::Result;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub settings: VideoSettings,
    pub series: Vec<VideoSeries>,
}

/// Encoder settings shared by the normalization and concat passes.
///
/// The codec defaults to NVENC but is plain configuration, so machines
/// without NVIDIA hardware can point it at `libx264` or similar.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    pub codec: String,
    pub target_size: String,
    pub fps: u32,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            codec: "h264_nvenc".to_string(),
            target_size: "1920x1080".to_string(),
            fps: 60,
        }
    }
}

/// One series of videos to download, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoSeries {
    /// Folder name the series is downloaded into.
    pub title: String,
    pub urls: Vec<String>,
}

/// Load `videos.toml` from the given directory.
///
/// A missing file is not an error: downloads simply have nothing to do, and
/// merges fall back to the default encoder settings.
pub fn load_video_config(dir: &Path) -> Result<VideoConfig> {
    let path = dir.join("videos.toml");
    if !path.exists() {
        return Ok(VideoConfig::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_video_config(dir.path()).unwrap();
        assert_eq!(config.settings.codec, "h264_nvenc");
        assert!(config.series.is_empty());
    }

    #[test]
    fn settings_and_series_parse() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("videos.toml"),
            r#"
[settings]
codec = "libx264"
fps = 30

[[series]]
title = "lectures"
urls = ["https://example.com/a.mp4", "https://example.com/b.mp4"]
"#,
        )
        .unwrap();

        let config = load_video_config(dir.path()).unwrap();
        assert_eq!(config.settings.codec, "libx264");
        assert_eq!(config.settings.fps, 30);
        // Unset fields keep their defaults.
        assert_eq!(config.settings.target_size, "1920x1080");
        assert_eq!(config.series.len(), 1);
        assert_eq!(config.series[0].urls.len(), 2);
    }
}
