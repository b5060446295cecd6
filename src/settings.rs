//! Global study settings
//!
//! A small config struct persisted through the same key-value capability as
//! the reports. The scoring core never interprets these values itself; they
//! are handed through to the external domain-scoring function and to text
//! resolution.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StoreError};

/// Storage key for the settings record
const SETTINGS_KEY: &str = "settings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySettings {
    /// Display locale for localized content (diagnosis texts)
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Half-life in days used by the domain decay curve
    #[serde(default = "default_domain_decay_days")]
    pub domain_decay_days: f64,
    /// How many items a study session draws by default
    #[serde(default = "default_items_per_session")]
    pub items_per_session: u32,
}

fn default_locale() -> String {
    "pt".to_string()
}

fn default_domain_decay_days() -> f64 {
    30.0
}

fn default_items_per_session() -> u32 {
    20
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            domain_decay_days: default_domain_decay_days(),
            items_per_session: default_items_per_session(),
        }
    }
}

impl StudySettings {
    /// Load settings from the store, falling back to defaults when nothing
    /// was saved yet or the record cannot be read.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        match store.load(SETTINGS_KEY) {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Failed to load study settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn save<S: KeyValueStore>(&self, store: &S) -> Result<(), StoreError> {
        store.save(SETTINGS_KEY, self)
    }
}
