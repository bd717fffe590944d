// src/store/mod.rs

//! Thin persistent key-value store.
//!
//! The whole store is one JSON document with a handful of bookkeeping
//! fields; it is read and rewritten wholesale. Single local process, no
//! cross-process locking.

use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;

pub mod mock;

/// The single persisted record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreDb {
    /// ISO-8601 date of the last self-update check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_check_date: Option<String>,
}

/// Abstract store interface.
///
/// Injected into the update gate so tests can substitute an in-memory fake.
pub trait Store: Send + Sync + Debug {
    fn load(&self) -> Result<StoreDb>;
    fn save(&self, db: &StoreDb) -> Result<()>;
}

/// Implementation backed by a JSON document on disk.
///
/// The containing directory and an empty `{}` document are created on first
/// access.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the local data directory, e.g.
    /// `~/.local/share/toolbelt/store.json` on Linux.
    pub fn default_location() -> Result<Self> {
        let dir = dirs::data_local_dir()
            .context("no local data directory available on this platform")?;
        Ok(Self::new(dir.join("toolbelt").join("store.json")))
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<StoreDb> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file missing; creating empty document");
            let db = StoreDb::default();
            self.save(&db)?;
            return Ok(db);
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, db: &StoreDb) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(db)?)?;
        Ok(())
    }
}
