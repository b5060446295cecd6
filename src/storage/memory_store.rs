//! In-memory key-value store
//!
//! Keeps serialized JSON strings in a mutex-guarded map. Used by tests and
//! by embedders that do not want anything touching the filesystem.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::kv::{KeyValueStore, Result};

#[derive(Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.entries.lock().unwrap().insert(key.to_string(), json);
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_none() {
        let store = MemoryKvStore::new();

        let loaded: Option<u32> = store.load("nada").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryKvStore::new();

        store.save("resposta", &42u32).unwrap();

        let loaded: u32 = store.load("resposta").unwrap().unwrap();
        assert_eq!(loaded, 42);
    }
}
