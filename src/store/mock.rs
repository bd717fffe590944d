// src/store/mock.rs

use std::sync::{Arc, Mutex};

use super::{Store, StoreDb};
use crate::errors::Result;

/// In-memory store for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    db: Arc<Mutex<StoreDb>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(db: StoreDb) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Current contents, for assertions.
    pub fn snapshot(&self) -> StoreDb {
        self.db.lock().unwrap().clone()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<StoreDb> {
        Ok(self.db.lock().unwrap().clone())
    }

    fn save(&self, db: &StoreDb) -> Result<()> {
        *self.db.lock().unwrap() = db.clone();
        Ok(())
    }
}
