// src/analytics/mastery.rs

use std::collections::HashMap;

use crate::models::answer::AnswerRecord;

/// Attempt counts below this threshold are not trusted at face value.
pub const MIN_CONFIDENT_ATTEMPTS: u32 = 3;
/// Flat discount applied to accuracy built on too few attempts.
pub const LOW_SAMPLE_DAMPING: f64 = 0.7;

/// Per-topic mastery aggregate for one learner.
#[derive(Debug, Clone)]
pub struct TopicMastery {
    pub topic_id: i64,
    pub attempts: u32,
    pub correct: u32,
    pub raw_mastery: f64,
    pub adjusted_mastery: f64,
}

/// Aggregates one learner's answers into per-topic mastery estimates.
///
/// Raw mastery is plain accuracy. With fewer than
/// [`MIN_CONFIDENT_ATTEMPTS`] attempts the estimate is discounted by
/// [`LOW_SAMPLE_DAMPING`]: one or two answers cannot support a confident
/// mastery claim. Topics the learner never attempted are absent from the
/// result; the merge step treats absence as zero mastery.
pub fn score_mastery(answers: &[AnswerRecord]) -> HashMap<i64, TopicMastery> {
    let mut counts: HashMap<i64, (u32, u32)> = HashMap::new();
    for a in answers {
        let entry = counts.entry(a.topic_id).or_insert((0, 0));
        entry.0 += 1;
        if a.is_correct {
            entry.1 += 1;
        }
    }

    counts
        .into_iter()
        .map(|(topic_id, (attempts, correct))| {
            let raw = f64::from(correct) / f64::from(attempts);
            let adjusted = if attempts < MIN_CONFIDENT_ATTEMPTS {
                raw * LOW_SAMPLE_DAMPING
            } else {
                raw
            };
            (
                topic_id,
                TopicMastery {
                    topic_id,
                    attempts,
                    correct,
                    raw_mastery: raw,
                    adjusted_mastery: adjusted,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(topic_id: i64, correct: usize, wrong: usize) -> Vec<AnswerRecord> {
        let mut v = vec![
            AnswerRecord {
                is_correct: true,
                topic_id
            };
            correct
        ];
        v.extend(vec![
            AnswerRecord {
                is_correct: false,
                topic_id
            };
            wrong
        ]);
        v
    }

    #[test]
    fn no_answers_means_no_aggregates() {
        assert!(score_mastery(&[]).is_empty());
    }

    #[test]
    fn single_correct_attempt_is_damped() {
        let mastery = score_mastery(&answers(1, 1, 0));
        let m = &mastery[&1];
        assert_eq!(m.attempts, 1);
        assert!((m.raw_mastery - 1.0).abs() < 1e-9);
        assert!((m.adjusted_mastery - 0.7).abs() < 1e-9);
    }

    #[test]
    fn two_attempts_still_damped() {
        let mastery = score_mastery(&answers(1, 1, 1));
        let m = &mastery[&1];
        assert!((m.raw_mastery - 0.5).abs() < 1e-9);
        assert!((m.adjusted_mastery - 0.35).abs() < 1e-9);
    }

    #[test]
    fn three_attempts_trusted_at_face_value() {
        let mastery = score_mastery(&answers(1, 3, 0));
        let m = &mastery[&1];
        assert!((m.raw_mastery - 1.0).abs() < 1e-9);
        assert!((m.adjusted_mastery - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_accuracy_stays_zero_under_damping() {
        let mastery = score_mastery(&answers(1, 0, 2));
        assert_eq!(mastery[&1].adjusted_mastery, 0.0);
    }

    #[test]
    fn topics_aggregate_independently() {
        let mut all = answers(1, 4, 0);
        all.extend(answers(2, 1, 3));
        let mastery = score_mastery(&all);
        assert_eq!(mastery.len(), 2);
        assert_eq!(mastery[&1].correct, 4);
        assert_eq!(mastery[&2].attempts, 4);
        assert!((mastery[&2].raw_mastery - 0.25).abs() < 1e-9);
    }
}
