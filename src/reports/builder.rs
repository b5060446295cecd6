//! Attempt report construction
//!
//! Pure assembly over the answered batch: counts, rounded accuracy and the
//! wrong-item detail rows. The only ambient inputs are the clock (sampled
//! once for `finished_at`) and the random report id suffix.

use chrono::{DateTime, Utc};

use crate::content::Question;
use crate::reports::models::{new_report_id, AttemptReport, WrongItemReport, NO_ANSWER_MARKER};

/// Build the immutable report for one finished attempt.
///
/// Never fails: malformed questions degrade to the no-answer marker in the
/// affected fields instead of aborting the report.
pub fn build_report(
    lesson_id: &str,
    practice_type: &str,
    started_at: DateTime<Utc>,
    answered: &[Question],
) -> AttemptReport {
    let finished_at = Utc::now();
    let duration_sec = (finished_at - started_at).num_seconds().max(0);

    let total_items = answered.len();
    let total_correct = answered.iter().filter(|q| q.last_was_correct).count();
    let total_wrong = total_items - total_correct;

    let accuracy_pct = if total_items == 0 {
        0
    } else {
        (100.0 * total_correct as f64 / total_items as f64).round() as u8
    };

    let wrong_items = answered
        .iter()
        .filter(|q| !q.last_was_correct)
        .map(wrong_item_report)
        .collect();

    AttemptReport {
        id: new_report_id(),
        lesson_id: lesson_id.to_string(),
        practice_type: practice_type.to_string(),
        started_at,
        finished_at,
        total_items,
        total_correct,
        total_wrong,
        accuracy_pct,
        duration_sec,
        wrong_items,
    }
}

fn wrong_item_report(question: &Question) -> WrongItemReport {
    let chosen = question.your_answer.and_then(|a| a.choice());

    let your_answer = chosen
        .map(|k| k.as_str().to_string())
        .unwrap_or_else(|| NO_ANSWER_MARKER.to_string());
    let your_answer_text = chosen
        .and_then(|k| question.option_text(k))
        .map(str::to_string)
        .unwrap_or_else(|| NO_ANSWER_MARKER.to_string());

    let correct_answer_text = question
        .option_text(question.correct_answer)
        .map(str::to_string)
        .unwrap_or_else(|| NO_ANSWER_MARKER.to_string());

    WrongItemReport {
        question_id: question.id.clone(),
        reference: question.reference.clone(),
        question_text: question.text.clone(),
        your_answer,
        your_answer_text,
        correct_answer: question.correct_answer.as_str().to_string(),
        correct_answer_text,
        explanation: question.explanation.clone(),
        diagnosis: question.wrong_diagnosis.clone(),
        subject: question.subject.clone(),
        topic: question.topic.clone(),
        time_sec: question.time_sec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{AnswerKey, OptionKey};
    use chrono::Duration;

    fn answered_question(id: &str, correct: bool) -> Question {
        let mut q = Question::new(id, "What does article 5 guarantee?", OptionKey::C)
            .with_options(["Property", "Liberty", "Equality", "Privacy"]);
        q.your_answer = Some(if correct { AnswerKey::C } else { AnswerKey::A });
        q.last_was_correct = correct;
        q.subject = "Constitutional".to_string();
        q.topic = "Fundamental rights".to_string();
        q
    }

    #[test]
    fn test_build_report_counts_and_accuracy() {
        let mut batch = Vec::new();
        for i in 0..7 {
            batch.push(answered_question(&format!("q{}", i), true));
        }
        for i in 7..10 {
            batch.push(answered_question(&format!("q{}", i), false));
        }
        let started_at = Utc::now() - Duration::seconds(300);

        let report = build_report("civil-1", "quiz", started_at, &batch);

        assert_eq!(report.total_items, 10);
        assert_eq!(report.total_correct, 7);
        assert_eq!(report.total_wrong, 3);
        assert_eq!(report.accuracy_pct, 70);
        assert_eq!(report.wrong_items.len(), 3);
        assert!(report.duration_sec >= 300 && report.duration_sec < 310);
        assert_eq!(report.lesson_id, "civil-1");
        assert_eq!(report.practice_type, "quiz");
    }

    #[test]
    fn test_build_report_empty_batch() {
        let report = build_report("civil-1", "quiz", Utc::now(), &[]);

        assert_eq!(report.total_items, 0);
        assert_eq!(report.accuracy_pct, 0);
        assert!(report.wrong_items.is_empty());
    }

    #[test]
    fn test_accuracy_rounds_to_nearest() {
        let mut batch = vec![answered_question("q0", true)];
        batch.push(answered_question("q1", true));
        batch.push(answered_question("q2", false));

        let report = build_report("l", "quiz", Utc::now(), &batch);

        // 2/3 is 66.67, rounded up
        assert_eq!(report.accuracy_pct, 67);
    }

    #[test]
    fn test_duration_clamped_to_zero() {
        let started_at = Utc::now() + Duration::seconds(120);

        let report = build_report("l", "quiz", started_at, &[]);

        assert_eq!(report.duration_sec, 0);
    }

    #[test]
    fn test_wrong_item_captures_both_answers() {
        let batch = vec![answered_question("q1", false)];

        let report = build_report("l", "quiz", Utc::now(), &batch);

        let item = &report.wrong_items[0];
        assert_eq!(item.question_id, "q1");
        assert_eq!(item.your_answer, "A");
        assert_eq!(item.your_answer_text, "Property");
        assert_eq!(item.correct_answer, "C");
        assert_eq!(item.correct_answer_text, "Equality");
        assert_eq!(item.subject, "Constitutional");
    }

    #[test]
    fn test_unanswered_question_uses_marker() {
        let mut q = answered_question("q1", false);
        q.your_answer = Some(AnswerKey::Unanswered);

        let report = build_report("l", "quiz", Utc::now(), &[q]);

        let item = &report.wrong_items[0];
        assert_eq!(item.your_answer, NO_ANSWER_MARKER);
        assert_eq!(item.your_answer_text, NO_ANSWER_MARKER);
    }

    #[test]
    fn test_missing_answer_field_uses_marker() {
        let mut q = answered_question("q1", false);
        q.your_answer = None;

        let report = build_report("l", "quiz", Utc::now(), &[q]);

        assert_eq!(report.wrong_items[0].your_answer, NO_ANSWER_MARKER);
    }

    #[test]
    fn test_missing_option_text_uses_marker() {
        let mut q = Question::new("q1", "Incomplete question", OptionKey::D);
        q.your_answer = Some(AnswerKey::B);
        q.last_was_correct = false;

        let report = build_report("l", "quiz", Utc::now(), &[q]);

        let item = &report.wrong_items[0];
        assert_eq!(item.your_answer, "B");
        assert_eq!(item.your_answer_text, NO_ANSWER_MARKER);
        assert_eq!(item.correct_answer, "D");
        assert_eq!(item.correct_answer_text, NO_ANSWER_MARKER);
    }

    #[test]
    fn test_report_survives_json_round_trip() {
        let batch = vec![answered_question("q1", false), answered_question("q2", true)];
        let report = build_report("civil-1", "review", Utc::now(), &batch);

        let json = serde_json::to_string(&report).unwrap();
        let restored: AttemptReport = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, report);
    }
}
