//! History-view aggregate over stored attempt reports

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reports::models::AttemptReport;

/// Rolled-up history line for one lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSummary {
    pub lesson_id: String,
    pub attempts: usize,
    pub avg_accuracy_pct: f64,
    pub best_accuracy_pct: u8,
    pub total_wrong: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_finished_at: Option<DateTime<Utc>>,
}

/// Summarize the lesson's attempts. Reports for other lessons are ignored,
/// so callers may pass the full history unfiltered.
pub fn summarize_lesson(lesson_id: &str, reports: &[AttemptReport]) -> LessonSummary {
    let matching: Vec<&AttemptReport> = reports
        .iter()
        .filter(|r| r.lesson_id == lesson_id)
        .collect();

    let attempts = matching.len();
    let avg_accuracy_pct = if attempts == 0 {
        0.0
    } else {
        matching.iter().map(|r| r.accuracy_pct as f64).sum::<f64>() / attempts as f64
    };

    LessonSummary {
        lesson_id: lesson_id.to_string(),
        attempts,
        avg_accuracy_pct,
        best_accuracy_pct: matching.iter().map(|r| r.accuracy_pct).max().unwrap_or(0),
        total_wrong: matching.iter().map(|r| r.total_wrong).sum(),
        last_finished_at: matching.iter().map(|r| r.finished_at).max(),
    }
}
