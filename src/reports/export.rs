//! Report export
//!
//! Serializes a report to pretty JSON and derives the download filename.
//! Unlike the stores, export failures surface to the caller: the user asked
//! for a file and must hear about it when none was produced.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use regex::Regex;
use thiserror::Error;

use crate::reports::models::AttemptReport;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A report rendered for download
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedReport {
    pub filename: String,
    pub contents: String,
}

/// Render the report as pretty-printed JSON with its derived filename
pub fn export_as_json(report: &AttemptReport) -> Result<ExportedReport, ExportError> {
    Ok(ExportedReport {
        filename: report_filename(&report.lesson_id, &report.practice_type, report.finished_at),
        contents: serde_json::to_string_pretty(report)?,
    })
}

/// Download filename for a report. The lesson and practice-type components
/// are sanitized individually; the date and time come from the template and
/// are always UTC.
pub fn report_filename(
    lesson_id: &str,
    practice_type: &str,
    finished_at: DateTime<Utc>,
) -> String {
    format!(
        "miaaula_report_{}_{}_{}.json",
        sanitize_component(lesson_id),
        sanitize_component(practice_type),
        finished_at.format("%Y-%m-%d_%H-%M")
    )
}

fn sanitize_component(component: &str) -> String {
    let unsafe_chars = Regex::new(r"[^a-z0-9.]").unwrap();
    unsafe_chars
        .replace_all(&component.to_lowercase(), "_")
        .into_owned()
}

/// Destination for an exported file. The app shell hands downloads to the
/// browser; everything else writes through [`DirectorySink`].
pub trait DownloadSink {
    fn deliver(&self, filename: &str, contents: &[u8]) -> Result<(), ExportError>;
}

/// Sink writing exports into a directory on disk
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, filename: &str, contents: &[u8]) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(filename), contents)?;
        Ok(())
    }
}

/// Serialize the report and hand it to the sink, returning the filename
pub fn export_to_sink<S: DownloadSink>(
    report: &AttemptReport,
    sink: &S,
) -> Result<String, ExportError> {
    let exported = export_as_json(report)?;
    sink.deliver(&exported.filename, exported.contents.as_bytes())?;
    Ok(exported.filename)
}
