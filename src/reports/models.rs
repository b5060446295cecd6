//! Report value objects
//!
//! All types here are plain values with no back-references. An
//! `AttemptReport` is immutable once built and its JSON shape is the
//! compatibility contract with previously persisted history: field names and
//! order must stay stable so the history view keeps reading old records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::Diagnosis;

/// Marker written into report fields when an answer key or option text is
/// missing; report generation never fails on malformed content.
pub const NO_ANSWER_MARKER: &str = "—";

/// Build an attempt-report id: wall-clock millis plus a random suffix.
/// Unique for this use, deliberately not reproducible.
pub(crate) fn new_report_id() -> String {
    format!("{}-{:08x}", Utc::now().timestamp_millis(), rand::random::<u32>())
}

/// Pre-session `{mastery, domain}` baseline for one question
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub mastery: f64,
    pub domain: f64,
}

/// One incorrectly answered question inside an attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrongItemReport {
    pub question_id: String,
    pub reference: String,
    pub question_text: String,
    /// The answered key letter, or the no-answer marker
    pub your_answer: String,
    /// Text of the answered option, or the no-answer marker
    pub your_answer_text: String,
    pub correct_answer: String,
    pub correct_answer_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Captured as authored; resolved to one locale only at display time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Diagnosis>,
    pub subject: String,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_sec: Option<i64>,
}

/// Immutable record of one finished attempt over a batch of questions.
///
/// Invariants: `total_correct + total_wrong == total_items` and
/// `wrong_items.len() == total_wrong`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptReport {
    pub id: String,
    pub lesson_id: String,
    pub practice_type: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total_items: usize,
    pub total_correct: usize,
    pub total_wrong: usize,
    /// Rounded integer percentage, 0 for an empty attempt
    pub accuracy_pct: u8,
    pub duration_sec: i64,
    pub wrong_items: Vec<WrongItemReport>,
}

/// Per-session outcome with the averaged mastery/domain movement.
///
/// Not persisted by this crate; the session UI consumes it directly. Its
/// `accuracy` stays a real number on purpose, distinct from the rounded
/// `AttemptReport::accuracy_pct`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub id: Uuid,
    pub title: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub answered: usize,
    pub correct: usize,
    pub wrong: usize,
    /// Unrounded percentage of correct answers
    pub accuracy: f64,
    pub elapsed_sec: i64,
    pub avg_mastery_gain: f64,
    pub avg_domain_gain: f64,
    /// Currently tracks `accuracy`
    pub performance: f64,
    pub completed: bool,
}
