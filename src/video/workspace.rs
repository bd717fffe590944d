// src/video/workspace.rs

//! Temp-directory lifecycle for one merge run.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::errors::Result;

/// Scratch layout for a merge run: the source folder, a `temp` scratch
/// directory inside it, and the `merged.mp4` output.
#[derive(Debug, Clone)]
pub struct MergeWorkspace {
    pub source_dir: PathBuf,
    pub temp_dir: PathBuf,
    pub output_file: PathBuf,
}

impl MergeWorkspace {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let temp_dir = source_dir.join("temp");
        let output_file = source_dir.join("merged.mp4");
        Self {
            source_dir,
            temp_dir,
            output_file,
        }
    }

    /// Recreate the temp directory, wiping anything left behind by a
    /// previous failed run.
    pub fn prepare(&self) -> Result<()> {
        if self.temp_dir.exists() {
            debug!(dir = %self.temp_dir.display(), "removing stale temp directory");
            fs::remove_dir_all(&self.temp_dir)?;
        }
        fs::create_dir_all(&self.temp_dir)?;
        Ok(())
    }

    /// Remove the temp directory after a successful run.
    pub fn cleanup(&self) -> Result<()> {
        if self.temp_dir.exists() {
            fs::remove_dir_all(&self.temp_dir)?;
        }
        Ok(())
    }
}
