//! Versioned envelopes for persisted blobs.
//!
//! Everything written goes out as
//! `{"version": 1, "saved_at": "...", "data": <payload>}`. A bare JSON array
//! is the legacy (version 0) shape and is migrated on read. Anything else,
//! including blobs from a newer release, decodes to `None` so the caller
//! falls back to its default.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeOut<'a, T> {
    version: u32,
    saved_at: DateTime<Utc>,
    data: &'a T,
}

#[derive(Deserialize)]
struct EnvelopeIn {
    version: u32,
    data: Value,
}

/// A decoded payload, and whether it had to be migrated from an older shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub migrated: bool,
}

pub fn encode<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(&EnvelopeOut {
        version: SCHEMA_VERSION,
        saved_at: Utc::now(),
        data: value,
    })
}

pub fn decode<T: DeserializeOwned>(raw: &str) -> Option<Decoded<T>> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("discarding malformed blob: {}", e);
            return None;
        }
    };

    let (payload, migrated) = match value {
        Value::Array(_) => (value, true),
        Value::Object(_) => {
            let envelope: EnvelopeIn = serde_json::from_value(value).ok()?;
            if envelope.version > SCHEMA_VERSION {
                tracing::warn!(
                    "ignoring blob written by a newer release (schema v{})",
                    envelope.version
                );
                return None;
            }
            (envelope.data, envelope.version < SCHEMA_VERSION)
        }
        _ => return None,
    };

    match serde_json::from_value(payload) {
        Ok(value) => Some(Decoded { value, migrated }),
        Err(e) => {
            tracing::debug!("discarding blob with unexpected shape: {}", e);
            None
        }
    }
}
