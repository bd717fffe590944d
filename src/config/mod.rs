// src/config/mod.rs

//! Per-developer configuration: static project/package tables plus the
//! on-disk video config.

pub mod packages;
pub mod projects;
pub mod templates;
pub mod videos;

pub use videos::{VideoConfig, VideoSeries, VideoSettings, load_video_config};
