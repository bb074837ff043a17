use crate::error::Result;

/// Abstract interface for raw key-value storage.
///
/// Modelled on browser local storage: flat string keys mapping to string
/// values. This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::KvStore`] handles the "what" (typed values, schema
/// envelopes, degraded sessions).
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing whatever was there.
    /// MUST be atomic to avoid leaving a half-written value behind.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
