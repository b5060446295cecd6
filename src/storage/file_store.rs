//! File-backed key-value store
//!
//! Each key lives in its own pretty-printed JSON file under the base
//! directory, e.g. `attempt_reports` -> `<base>/attempt_reports.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::kv::{KeyValueStore, Result, StoreError};

pub struct FileKvStore {
    base_dir: PathBuf,
}

impl FileKvStore {
    /// Open a store rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Get the default data directory (`<local-data>/miaaula`)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("miaaula"))
            .ok_or(StoreError::DataDirNotFound)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKvStore {
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), json)?;
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileKvStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKvStore::new(temp_dir.path().to_path_buf()).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_load_absent_key_is_none() {
        let (store, _temp) = create_test_store();

        let loaded: Option<Vec<String>> = store.load("nothing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (store, _temp) = create_test_store();

        let value = vec!["um".to_string(), "dois".to_string()];
        store.save("lista", &value).unwrap();

        let loaded: Vec<String> = store.load("lista").unwrap().unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let (store, _temp) = create_test_store();

        store.save("contador", &1u32).unwrap();
        store.save("contador", &2u32).unwrap();

        let loaded: u32 = store.load("contador").unwrap().unwrap();
        assert_eq!(loaded, 2);
    }

    #[test]
    fn test_corrupt_file_is_a_json_error() {
        let (store, temp) = create_test_store();

        std::fs::write(temp.path().join("broken.json"), "{not json").unwrap();

        let result: Result<Option<u32>> = store.load("broken");
        assert!(matches!(result, Err(StoreError::Json(_))));
    }
}
