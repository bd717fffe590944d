// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolbeltError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Store error: {0}")]
    StoreError(#[from] serde_json::Error),

    #[error("Download error: {0}")]
    DownloadError(#[from] reqwest::Error),

    #[error("Video pipeline error: {0}")]
    PipelineError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ToolbeltError>;
