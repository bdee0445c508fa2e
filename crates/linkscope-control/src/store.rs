//! Inventory persistence.
//!
//! The inventory is a flat record list loaded and saved wholesale; the
//! resolver and API depend on the [`InventoryStore`] port, not on a file
//! path, so tests swap in an in-memory store.

use std::path::PathBuf;
use std::sync::Mutex;

use linkscope_common::models::InventoryRecord;

pub trait InventoryStore: Send + Sync {
    /// Current records, in stored order. A missing or corrupt backing
    /// store reads as empty — loading never fails.
    fn load_all(&self) -> Vec<InventoryRecord>;

    /// Replace the entire store with `records`.
    fn save_all(&self, records: &[InventoryRecord]) -> anyhow::Result<()>;
}

/// JSON file on disk, written wholesale on every save.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

impl InventoryStore for JsonFileStore {
    fn load_all(&self) -> Vec<InventoryRecord> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "inventory file unreadable, treating as empty"
                );
                Vec::new()
            }
        }
    }

    fn save_all(&self, records: &[InventoryRecord]) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().unwrap();
        let text = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}
