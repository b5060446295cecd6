//! Invalid-item audit records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::{OptionKey, Question};

/// How much of the question text goes into the audit snippet
const SNIPPET_CHARS: usize = 200;

/// Snapshot of a structurally broken question, taken when the session
/// engine refuses to serve it. Enough context to fix the source record
/// without loading the full content set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidItemReport {
    /// Dedup key: each question is reported at most once
    pub question_id: String,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub law_ref: Option<String>,
    pub declared_answer: OptionKey,
    pub missing_options: Vec<OptionKey>,
    pub has_raw_import: bool,
    pub snippet: String,
    pub logged_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl InvalidItemReport {
    pub fn new(
        question: &Question,
        missing_options: &[OptionKey],
        session_id: Option<&str>,
    ) -> Self {
        Self {
            question_id: question.id.clone(),
            reference: question.reference.clone(),
            law_ref: question.law_ref.clone(),
            declared_answer: question.correct_answer,
            missing_options: missing_options.to_vec(),
            has_raw_import: question.raw_import.is_some(),
            snippet: question.text.chars().take(SNIPPET_CHARS).collect(),
            logged_at: Utc::now(),
            session_id: session_id.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_truncates_by_characters() {
        let mut q = Question::new("q1", "é".repeat(300), OptionKey::A);
        q.raw_import = Some("<tr>...</tr>".to_string());

        let report = InvalidItemReport::new(&q, &[OptionKey::C], Some("s-1"));

        assert_eq!(report.snippet.chars().count(), 200);
        assert!(report.has_raw_import);
        assert_eq!(report.missing_options, vec![OptionKey::C]);
        assert_eq!(report.session_id.as_deref(), Some("s-1"));
    }

    #[test]
    fn test_short_text_kept_whole() {
        let q = Question::new("q1", "Short stem", OptionKey::B);

        let report = InvalidItemReport::new(&q, &[], None);

        assert_eq!(report.snippet, "Short stem");
        assert!(!report.has_raw_import);
        assert_eq!(report.declared_answer, OptionKey::B);
        assert_eq!(report.session_id, None);
    }
}
