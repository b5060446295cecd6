//! Key-value persistence capability
//!
//! The report store, the invalid-item log and the settings loader all talk
//! to the same small interface: save a serializable value under a key, load
//! it back, treat an absent key as "nothing stored yet". Any backing medium
//! (directory of JSON files, in-memory map, remote blob) can satisfy it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Capability interface over the persistent key-value medium.
///
/// `load` returns `Ok(None)` for a key that was never written; consumers
/// treat that the same as an empty collection.
pub trait KeyValueStore {
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()>;

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;
}
