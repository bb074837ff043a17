//! # Storage Layer
//!
//! Durable key-value storage for the catalog, in the shape of browser local
//! storage: flat string keys, JSON string values.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, one `<key>.json` file per
//!   key under the data directory.
//! - [`mem_backend::MemBackend`]: in-memory storage for testing, with write
//!   failure simulation.
//!
//! ## KvStore
//!
//! [`KvStore`] wraps a backend and adds the policies every caller relies on:
//!
//! - Reads never fail. Malformed JSON, the wrong shape or a blob from a newer
//!   release all read as "nothing stored", and the caller uses its default.
//! - Writes are last-writer-wins and wrapped in a versioned envelope (see
//!   [`schema`]).
//! - If the backend refuses a write (quota exceeded, read-only disk), the
//!   store switches to an in-memory session for the rest of its lifetime and
//!   queues a warning. Reading and filtering keep working; only durability
//!   is lost.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── grand_products.json   # product catalog
//! ├── gfi_likes_v1.json     # wishlist (product names)
//! └── config.json           # CatalogConfig
//! ```

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod schema;

pub use backend::StorageBackend;
pub use schema::Decoded;

pub const PRODUCTS_KEY: &str = "grand_products";
pub const LIKES_KEY: &str = "gfi_likes_v1";

pub struct KvStore<B: StorageBackend> {
    backend: B,
    // `None` marks a key removed while degraded.
    session: RefCell<HashMap<String, Option<String>>>,
    degraded: Cell<bool>,
    warnings: RefCell<Vec<String>>,
}

impl<B: StorageBackend> KvStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: RefCell::new(HashMap::new()),
            degraded: Cell::new(false),
            warnings: RefCell::new(Vec::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// True once a write has failed and the store is memory-only.
    pub fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    /// Drains the user-facing warnings queued since the last call.
    pub fn take_warnings(&self) -> Vec<String> {
        std::mem::take(&mut *self.warnings.borrow_mut())
    }

    /// Reads and decodes `key`, returning `default` when nothing usable is stored.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.read_versioned(key) {
            Some(decoded) => decoded.value,
            None => default,
        }
    }

    /// Reads and decodes `key`, reporting whether the blob needed migration.
    pub fn read_versioned<T: DeserializeOwned>(&self, key: &str) -> Option<Decoded<T>> {
        let raw = self.read_raw(key)?;
        let decoded = schema::decode(&raw);
        if decoded.is_none() {
            tracing::debug!(key, "stored value unusable, falling back to default");
        }
        decoded
    }

    /// Encodes and stores `value` under `key`.
    ///
    /// Only a serialization failure is returned; backend failures degrade
    /// the store instead.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = schema::encode(value)?;
        self.write_raw(key, raw);
        Ok(())
    }

    /// Reads `key` (or `default`), applies `f` and writes the result back.
    pub fn merge<T, R, F>(&self, key: &str, default: T, f: F) -> Result<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T) -> R,
    {
        let mut value = self.read(key, default);
        let out = f(&mut value);
        self.write(key, &value)?;
        Ok(out)
    }

    pub fn remove(&self, key: &str) {
        if !self.degraded.get() {
            match self.backend.remove(key) {
                Ok(()) => {
                    self.session.borrow_mut().remove(key);
                    return;
                }
                Err(e) => self.degrade(key, &e.to_string()),
            }
        }
        self.session.borrow_mut().insert(key.to_string(), None);
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        if let Some(raw) = self.session.borrow().get(key) {
            return raw.clone();
        }
        match self.backend.get(key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, "could not read from storage: {}", e);
                None
            }
        }
    }

    fn write_raw(&self, key: &str, raw: String) {
        if !self.degraded.get() {
            match self.backend.set(key, &raw) {
                Ok(()) => return,
                Err(e) => self.degrade(key, &e.to_string()),
            }
        }
        self.session.borrow_mut().insert(key.to_string(), Some(raw));
    }

    fn degrade(&self, key: &str, reason: &str) {
        if self.degraded.replace(true) {
            return;
        }
        tracing::warn!(key, "storage unavailable, continuing in memory: {}", reason);
        self.warnings.borrow_mut().push(format!(
            "Storage is unavailable ({}); changes will not be saved after this session.",
            reason
        ));
    }
}
