//! Attempt reports and session outcomes
//!
//! This module provides:
//! - Report construction over a finished answer batch
//! - Session aggregation with averaged mastery/domain movement
//! - Bounded report persistence and per-lesson history summaries
//! - JSON export with derived download filenames

pub mod builder;
pub mod export;
pub mod history;
pub mod models;
pub mod session;
pub mod store;

pub use builder::build_report;
pub use export::{
    export_as_json, export_to_sink, report_filename, DirectorySink, DownloadSink, ExportError,
    ExportedReport,
};
pub use history::{summarize_lesson, LessonSummary};
pub use models::*;
pub use session::aggregate_session;
pub use store::{ReportStore, MAX_STORED_REPORTS};
