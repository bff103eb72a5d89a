//! Key-value persistence for the portal.
//!
//! Models the storage contract the portal was designed against: string keys
//! holding JSON-encoded payloads, replaced wholesale on every write.
//! Read-modify-write belongs to the caller; the store never merges.
//!
//! Malformed stored JSON is treated as "collection absent" rather than an
//! error. Callers always tolerate an empty default.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Synchronous key-value storage port.
///
/// Writes are immediately visible to subsequent reads from the same store.
/// No partial-write or transactional guarantee is provided; every value is
/// replaced as a unit.
pub trait KvStore: Send + Sync {
    /// Raw string value under `key`, if present.
    fn get_raw(&self, key: &str) -> Option<String>;
    /// Replace the value under `key` entirely.
    fn set_raw(&self, key: &str, value: String);
    /// Drop `key` and its value.
    fn remove(&self, key: &str);
}

/// Typed JSON helpers over any [`KvStore`].
pub trait KvStoreExt: KvStore {
    /// Decode the value under `key`. A missing key or malformed payload
    /// yields `None`; decode failures are logged and swallowed.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, %err, "discarding malformed stored JSON");
                None
            }
        }
    }

    /// Encode `value` and replace whatever is stored under `key`.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set_raw(key, raw),
            Err(err) => warn!(key, %err, "failed to encode value; key left unchanged"),
        }
    }
}

impl<S: KvStore + ?Sized> KvStoreExt for S {}
