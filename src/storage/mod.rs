//! Persistence layer
//!
//! A small key-value capability (`KeyValueStore`) with two media: a
//! directory of JSON files and an in-memory map. Everything the crate
//! persists (attempt reports, the invalid-item log, study settings) goes
//! through this interface.

mod file_store;
mod kv;
mod memory_store;

pub use file_store::FileKvStore;
pub use kv::{KeyValueStore, StoreError};
pub use memory_store::MemoryKvStore;
