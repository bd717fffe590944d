// src/video/mod.rs

//! Video download and merge pipeline.

pub mod assets;
pub mod download;
pub mod pipeline;
pub mod workspace;

pub use assets::VideoAsset;
pub use download::DownloadMode;
pub use workspace::MergeWorkspace;
