use super::backend::StorageBackend;
use crate::error::{CatalogError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the catalog is
/// single-threaded, which lets `StorageBackend` take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, as a full or disabled storage would.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Plant a raw value, bypassing any encoding. Used to stage corrupted
    /// or legacy blobs.
    pub fn with_raw(self, key: &str, raw: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        self
    }

    /// The raw value as stored, for assertions.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CatalogError::Store(
                "Simulated quota exceeded".to_string(),
            ));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
