//! Data models for study content
//!
//! Questions are owned by the content layer and read-only here: the scoring
//! core consumes their answer state and proficiency inputs but never writes
//! them back.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the four answer options of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    /// All keys in display order
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::A => "A",
            OptionKey::B => "B",
            OptionKey::C => "C",
            OptionKey::D => "D",
        }
    }
}

/// Recorded answer state of a question: one of the option keys, or the
/// explicit "left blank" sentinel the session UI writes when the user moves
/// on without choosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
    #[serde(rename = "unanswered")]
    Unanswered,
}

impl AnswerKey {
    /// The chosen option, if one was chosen
    pub fn choice(self) -> Option<OptionKey> {
        match self {
            AnswerKey::A => Some(OptionKey::A),
            AnswerKey::B => Some(OptionKey::B),
            AnswerKey::C => Some(OptionKey::C),
            AnswerKey::D => Some(OptionKey::D),
            AnswerKey::Unanswered => None,
        }
    }
}

/// Reviewer-written diagnosis of why an option is a common trap.
///
/// Older content carries a plain string; newer content carries one text per
/// locale code. Display code picks a locale through [`Diagnosis::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Diagnosis {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl Diagnosis {
    /// Select the text for `locale`, falling back to Portuguese and then to
    /// any text present at all.
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        match self {
            Diagnosis::Plain(text) => Some(text),
            Diagnosis::Localized(texts) => texts
                .get(locale)
                .or_else(|| texts.get("pt"))
                .or_else(|| texts.values().next())
                .map(String::as_str),
        }
    }
}

/// A quiz question with its answer state and proficiency inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    /// Reference code from the question bank (e.g. "OAB-2023-II-14")
    #[serde(default)]
    pub reference: String,
    /// The question statement
    pub text: String,
    /// Option texts; a structurally broken record may lack keys
    #[serde(default)]
    pub options: BTreeMap<OptionKey, String>,
    pub correct_answer: OptionKey,
    /// Final answer state after the attempt; absent when never touched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_answer: Option<AnswerKey>,
    /// Whether the latest answer was graded correct
    #[serde(default)]
    pub last_was_correct: bool,
    /// Long-term retention proxy, maintained by the scheduler
    #[serde(default)]
    pub mastery_score: f64,
    /// Last consolidated domain value, decayed over time by the scheduler
    #[serde(default)]
    pub domain_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_practiced_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrong_diagnosis: Option<Diagnosis>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub topic: String,
    /// Seconds the user spent on this item in the last attempt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_sec: Option<i64>,
    /// Statute or source reference, when the question cites one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub law_ref: Option<String>,
    /// Unparsed source block kept by the importer for problem records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_import: Option<String>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        correct_answer: OptionKey,
    ) -> Self {
        Self {
            id: id.into(),
            reference: String::new(),
            text: text.into(),
            options: BTreeMap::new(),
            correct_answer,
            your_answer: None,
            last_was_correct: false,
            mastery_score: 0.0,
            domain_score: 0.0,
            last_practiced_at: None,
            explanation: None,
            wrong_diagnosis: None,
            subject: String::new(),
            topic: String::new(),
            time_sec: None,
            law_ref: None,
            raw_import: None,
        }
    }

    /// Fill all four option texts in key order
    pub fn with_options(mut self, texts: [&str; 4]) -> Self {
        for (key, text) in OptionKey::ALL.into_iter().zip(texts) {
            self.options.insert(key, text.to_string());
        }
        self
    }

    pub fn option_text(&self, key: OptionKey) -> Option<&str> {
        self.options.get(&key).map(String::as_str)
    }

    /// Option keys this record is missing; non-empty means the record is
    /// broken and should go to the invalid-item log.
    pub fn missing_option_keys(&self) -> Vec<OptionKey> {
        OptionKey::ALL
            .into_iter()
            .filter(|key| !self.options.contains_key(key))
            .collect()
    }

    pub fn is_structurally_sound(&self) -> bool {
        self.missing_option_keys().is_empty() && !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_key_choice() {
        assert_eq!(AnswerKey::B.choice(), Some(OptionKey::B));
        assert_eq!(AnswerKey::Unanswered.choice(), None);
    }

    #[test]
    fn test_missing_option_keys() {
        let mut question = Question::new("q1", "Enunciado", OptionKey::A)
            .with_options(["um", "dois", "tres", "quatro"]);
        assert!(question.missing_option_keys().is_empty());
        assert!(question.is_structurally_sound());

        question.options.remove(&OptionKey::B);
        question.options.remove(&OptionKey::D);
        assert_eq!(
            question.missing_option_keys(),
            vec![OptionKey::B, OptionKey::D]
        );
        assert!(!question.is_structurally_sound());
    }

    #[test]
    fn test_blank_text_is_not_sound() {
        let question =
            Question::new("q1", "   ", OptionKey::A).with_options(["a", "b", "c", "d"]);
        assert!(!question.is_structurally_sound());
    }

    #[test]
    fn test_diagnosis_resolve_plain() {
        let diagnosis = Diagnosis::Plain("confunde prazos".to_string());
        assert_eq!(diagnosis.resolve("en"), Some("confunde prazos"));
    }

    #[test]
    fn test_diagnosis_resolve_localized_with_fallback() {
        let mut texts = BTreeMap::new();
        texts.insert("pt".to_string(), "troca os conceitos".to_string());
        texts.insert("en".to_string(), "swaps the concepts".to_string());
        let diagnosis = Diagnosis::Localized(texts);

        assert_eq!(diagnosis.resolve("en"), Some("swaps the concepts"));
        assert_eq!(diagnosis.resolve("es"), Some("troca os conceitos"));

        let mut only_en = BTreeMap::new();
        only_en.insert("en".to_string(), "english only".to_string());
        assert_eq!(
            Diagnosis::Localized(only_en).resolve("es"),
            Some("english only")
        );
    }

    #[test]
    fn test_question_serde_shape() {
        let mut question = Question::new("q7", "Qual o prazo?", OptionKey::C)
            .with_options(["5 dias", "10 dias", "15 dias", "30 dias"]);
        question.your_answer = Some(AnswerKey::Unanswered);

        let json = serde_json::to_string(&question).unwrap();
        assert!(json.contains("\"correctAnswer\":\"C\""));
        assert!(json.contains("\"yourAnswer\":\"unanswered\""));
        assert!(json.contains("\"lastWasCorrect\":false"));

        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back.option_text(OptionKey::C), Some("15 dias"));
    }
}
