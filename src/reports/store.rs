//! Attempt report persistence
//!
//! Reports live as one JSON array under a single key, most recent first,
//! capped at `MAX_STORED_REPORTS`. Storage failures never reach the caller:
//! a report that cannot be written is logged and dropped, and unreadable
//! history reads as empty.

use crate::reports::models::AttemptReport;
use crate::storage::KeyValueStore;

const REPORTS_KEY: &str = "attempt_reports";

/// Hard cap on persisted reports; the oldest fall off first.
pub const MAX_STORED_REPORTS: usize = 200;

pub struct ReportStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ReportStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a report at the head of the history, evicting past the cap.
    /// Failures are logged and swallowed.
    pub fn save(&self, report: &AttemptReport) {
        let mut reports = self.load_or_empty();
        reports.insert(0, report.clone());
        reports.truncate(MAX_STORED_REPORTS);

        if let Err(e) = self.store.save(REPORTS_KEY, &reports) {
            log::warn!("Failed to save attempt report {}: {}", report.id, e);
        } else {
            log::debug!("Saved attempt report {} ({} stored)", report.id, reports.len());
        }
    }

    /// All stored reports, most recent first
    pub fn list_all(&self) -> Vec<AttemptReport> {
        self.load_or_empty()
    }

    /// Reports for one lesson, most recent first
    pub fn list_by_lesson(&self, lesson_id: &str) -> Vec<AttemptReport> {
        self.list_all()
            .into_iter()
            .filter(|r| r.lesson_id == lesson_id)
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<AttemptReport> {
        self.list_all().into_iter().find(|r| r.id == id)
    }

    fn load_or_empty(&self) -> Vec<AttemptReport> {
        match self.store.load(REPORTS_KEY) {
            Ok(Some(reports)) => reports,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to load attempt reports: {}", e);
                Vec::new()
            }
        }
    }
}
