//! Session outcome aggregation
//!
//! Folds a finished study session into a `SessionResult`, including the
//! average mastery and domain movement against the pre-session baselines.
//! Questions without a baseline snapshot contribute nothing to the gain sums
//! but still count in the divisor, so unmatched items dilute the averages.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::content::Question;
use crate::reports::models::{ScoreSnapshot, SessionResult};
use crate::settings::StudySettings;

/// Aggregate one finished session.
///
/// `initial_states` maps question ids to their pre-session scores. The
/// current domain score is supplied by `domain_score`, which is called once
/// per question that has a baseline snapshot.
pub fn aggregate_session<F>(
    title: &str,
    started_at: DateTime<Utc>,
    answered: &[Question],
    initial_states: &HashMap<String, ScoreSnapshot>,
    settings: &StudySettings,
    completed: bool,
    domain_score: F,
) -> SessionResult
where
    F: Fn(&Question, &StudySettings) -> f64,
{
    let ended_at = Utc::now();
    let elapsed_sec = (ended_at - started_at).num_seconds().max(0);

    let total = answered.len();
    let correct = answered.iter().filter(|q| q.last_was_correct).count();
    let wrong = total - correct;

    let accuracy = if total == 0 {
        0.0
    } else {
        100.0 * correct as f64 / total as f64
    };

    let mut mastery_gain_sum = 0.0;
    let mut domain_gain_sum = 0.0;
    for question in answered {
        if let Some(snapshot) = initial_states.get(&question.id) {
            mastery_gain_sum += question.mastery_score - snapshot.mastery;
            domain_gain_sum += domain_score(question, settings) - snapshot.domain;
        }
    }

    let (avg_mastery_gain, avg_domain_gain) = if total == 0 {
        (0.0, 0.0)
    } else {
        (mastery_gain_sum / total as f64, domain_gain_sum / total as f64)
    };

    SessionResult {
        id: Uuid::new_v4(),
        title: title.to_string(),
        started_at,
        ended_at,
        answered: total,
        correct,
        wrong,
        accuracy,
        elapsed_sec,
        avg_mastery_gain,
        avg_domain_gain,
        performance: accuracy,
        completed,
    }
}
