//! Invalid-item log persistence
//!
//! Best-effort diagnostic side channel. A question that cannot be served is
//! recorded here once; repeat sightings are dropped so re-running a session
//! over the same broken content does not grow the log.

use crate::audit::models::InvalidItemReport;
use crate::content::{OptionKey, Question};
use crate::storage::KeyValueStore;

const INVALID_ITEMS_KEY: &str = "invalid_items";

pub struct InvalidItemLog<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> InvalidItemLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a broken question. First write wins per question id; storage
    /// failures are logged and swallowed.
    pub fn log_invalid_item(
        &self,
        question: &Question,
        missing_options: &[OptionKey],
        session_id: Option<&str>,
    ) {
        let mut items = self.load_or_empty();
        if items.iter().any(|item| item.question_id == question.id) {
            return;
        }

        items.push(InvalidItemReport::new(question, missing_options, session_id));

        if let Err(e) = self.store.save(INVALID_ITEMS_KEY, &items) {
            log::warn!("Failed to log invalid item {}: {}", question.id, e);
        } else {
            log::info!("Logged invalid question {}", question.id);
        }
    }

    /// All recorded invalid items, oldest first
    pub fn list(&self) -> Vec<InvalidItemReport> {
        self.load_or_empty()
    }

    fn load_or_empty(&self) -> Vec<InvalidItemReport> {
        match self.store.load(INVALID_ITEMS_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to load invalid item log: {}", e);
                Vec::new()
            }
        }
    }
}
