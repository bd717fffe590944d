// src/video/assets.rs

//! Discovery and ordering of numbered video files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// One source video, ordered by the integer parsed from its filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAsset {
    pub ordinal: u32,
    pub path: PathBuf,
}

/// Parse the merge ordinal from a filename like `12.mp4`.
///
/// The ordinal is the text before the first `.`; anything non-numeric
/// (`merged.mp4`, `notes.txt`) is not an asset.
pub fn parse_ordinal(file_name: &str) -> Option<u32> {
    if !file_name.ends_with(".mp4") {
        return None;
    }
    file_name.split('.').next()?.parse().ok()
}

/// List the numbered `.mp4` files in `dir`, sorted ascending by ordinal.
///
/// The sort is numeric on purpose: lexicographically `"10.mp4"` comes
/// before `"2.mp4"`, which is the wrong merge order.
pub fn discover_assets(dir: &Path) -> Result<Vec<VideoAsset>> {
    let mut assets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(ordinal) = parse_ordinal(name) {
            assets.push(VideoAsset { ordinal, path });
        }
    }
    assets.sort_by_key(|a| a.ordinal);
    Ok(assets)
}
