use std::path::PathBuf;

use anyhow::{Context, Result};

use miaaula_lib::audit::InvalidItemLog;
use miaaula_lib::reports::{AttemptReport, ReportStore};
use miaaula_lib::settings::StudySettings;
use miaaula_lib::storage::FileKvStore;

/// Shared application state for CLI commands
pub struct App {
    pub reports: ReportStore<FileKvStore>,
    pub invalid_items: InvalidItemLog<FileKvStore>,
    pub settings: StudySettings,
}

impl App {
    /// Initialize from the default data directory or an override
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => FileKvStore::default_data_dir().context("Failed to get data directory")?,
        };

        let reports = ReportStore::new(
            FileKvStore::new(data_dir.clone()).context("Failed to open report storage")?,
        );
        let invalid_items = InvalidItemLog::new(
            FileKvStore::new(data_dir.clone()).context("Failed to open audit storage")?,
        );
        let settings_store =
            FileKvStore::new(data_dir).context("Failed to open settings storage")?;
        let settings = StudySettings::load(&settings_store);

        Ok(Self {
            reports,
            invalid_items,
            settings,
        })
    }

    /// Look up a report by id with a user-facing error when absent
    pub fn find_report(&self, report_id: &str) -> Result<AttemptReport> {
        self.reports
            .find_by_id(report_id)
            .with_context(|| format!("No report with id '{}'", report_id))
    }
}
