// src/analytics/importance.rs

use std::collections::HashMap;

use crate::analytics::normalize::min_max;
use crate::error::AppError;
use crate::models::question::QuestionRecord;

/// Weight of question frequency in the importance score.
pub const W_FREQUENCY: f64 = 0.35;
/// Weight of total marks in the importance score.
pub const W_MARKS: f64 = 0.45;
/// Weight of the recency signal in the importance score.
/// The three weights sum to 1.0.
pub const W_RECENCY: f64 = 0.20;

/// Raw recency for topics whose average year lies in the future. Malformed
/// or future-dated data gets a fixed low-confidence score, never zero.
pub const FUTURE_YEAR_RECENCY: f64 = 0.1;

/// Per-topic aggregate over the question corpus, with the combined
/// importance score filled in.
#[derive(Debug, Clone)]
pub struct TopicStats {
    pub topic_id: i64,
    pub topic_name: String,
    pub subject_name: String,
    pub frequency: u32,
    pub total_marks: i64,
    pub avg_year: f64,
    /// Most recent exam year seen for this topic. Takes no part in the
    /// score; kept for diagnostics.
    pub max_year: i32,
    pub importance_score: f64,
}

struct TopicAccumulator {
    topic_name: String,
    subject_name: String,
    count: u32,
    marks_sum: i64,
    year_sum: i64,
    max_year: i32,
}

/// Aggregates the question corpus per topic and scores global importance.
///
/// One pass builds per-topic accumulators (frequency, total marks, year
/// stats), preserving first-appearance order so the later priority sort has
/// a deterministic tie-break. A second pass normalizes the frequency, marks
/// and recency series independently and combines them with the fixed
/// weights.
///
/// Recency decays with the gap between `current_year` and the topic's mean
/// exam year: `1 / (gap + 1)`, clamped to [`FUTURE_YEAR_RECENCY`] when the
/// mean year lies ahead of `current_year`.
pub fn score_importance(
    questions: &[QuestionRecord],
    current_year: i32,
) -> Result<Vec<TopicStats>, AppError> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut acc: Vec<(i64, TopicAccumulator)> = Vec::new();

    for q in questions {
        match index.get(&q.topic_id).copied() {
            Some(i) => {
                let entry = &mut acc[i].1;
                if entry.topic_name != q.topic_name || entry.subject_name != q.subject_name {
                    return Err(AppError::DataIntegrity(format!(
                        "topic {} maps to conflicting names: '{}'/'{}' vs '{}'/'{}'",
                        q.topic_id,
                        entry.topic_name,
                        entry.subject_name,
                        q.topic_name,
                        q.subject_name
                    )));
                }
                entry.count += 1;
                entry.marks_sum += i64::from(q.marks);
                entry.year_sum += i64::from(q.year);
                entry.max_year = entry.max_year.max(q.year);
            }
            None => {
                index.insert(q.topic_id, acc.len());
                acc.push((
                    q.topic_id,
                    TopicAccumulator {
                        topic_name: q.topic_name.clone(),
                        subject_name: q.subject_name.clone(),
                        count: 1,
                        marks_sum: i64::from(q.marks),
                        year_sum: i64::from(q.year),
                        max_year: q.year,
                    },
                ));
            }
        }
    }

    let avg_years: Vec<f64> = acc
        .iter()
        .map(|(_, a)| a.year_sum as f64 / f64::from(a.count))
        .collect();

    let recency_raw: Vec<f64> = avg_years
        .iter()
        .map(|&avg_year| {
            let gap = f64::from(current_year) - avg_year;
            if gap >= 0.0 {
                1.0 / (gap + 1.0)
            } else {
                FUTURE_YEAR_RECENCY
            }
        })
        .collect();

    let norm_freq = min_max(
        &acc.iter()
            .map(|(_, a)| f64::from(a.count))
            .collect::<Vec<_>>(),
    );
    let norm_marks = min_max(
        &acc.iter()
            .map(|(_, a)| a.marks_sum as f64)
            .collect::<Vec<_>>(),
    );
    let norm_recency = min_max(&recency_raw);

    let stats = acc
        .into_iter()
        .enumerate()
        .map(|(i, (topic_id, a))| TopicStats {
            topic_id,
            topic_name: a.topic_name,
            subject_name: a.subject_name,
            frequency: a.count,
            total_marks: a.marks_sum,
            avg_year: avg_years[i],
            max_year: a.max_year,
            importance_score: W_FREQUENCY * norm_freq[i]
                + W_MARKS * norm_marks[i]
                + W_RECENCY * norm_recency[i],
        })
        .collect();

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(topic_id: i64, topic: &str, year: i32, marks: i32) -> QuestionRecord {
        QuestionRecord {
            question_id: 0,
            year,
            marks,
            topic_id,
            topic_name: topic.to_string(),
            subject_name: "Math".to_string(),
        }
    }

    #[test]
    fn empty_corpus_gives_no_stats() {
        let stats = score_importance(&[], 2026).unwrap();
        assert!(stats.is_empty());
    }

    #[test]
    fn aggregates_frequency_marks_and_years() {
        let corpus = vec![question(1, "A", 2023, 5), question(1, "A", 2025, 15)];
        let stats = score_importance(&corpus, 2026).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].frequency, 2);
        assert_eq!(stats[0].total_marks, 20);
        assert_eq!(stats[0].max_year, 2025);
        assert!((stats[0].avg_year - 2024.0).abs() < 1e-9);
    }

    #[test]
    fn identical_topics_score_equally() {
        let corpus = vec![
            question(1, "A", 2024, 10),
            question(2, "B", 2024, 10),
            question(3, "C", 2024, 10),
        ];
        let stats = score_importance(&corpus, 2026).unwrap();
        assert_eq!(stats.len(), 3);
        assert!((stats[0].importance_score - stats[1].importance_score).abs() < 1e-9);
        assert!((stats[1].importance_score - stats[2].importance_score).abs() < 1e-9);
    }

    #[test]
    fn recent_topic_outranks_old_topic() {
        // Same frequency and marks; only the exam years differ.
        let corpus = vec![
            question(1, "Modern", 2026, 10),
            question(1, "Modern", 2026, 10),
            question(2, "Old", 2016, 10),
            question(2, "Old", 2016, 10),
        ];
        let stats = score_importance(&corpus, 2026).unwrap();
        let modern = stats.iter().find(|s| s.topic_name == "Modern").unwrap();
        let old = stats.iter().find(|s| s.topic_name == "Old").unwrap();
        assert!(modern.importance_score > old.importance_score);
    }

    #[test]
    fn future_years_get_clamped_recency() {
        let corpus = vec![question(1, "Future", 2030, 5), question(2, "Now", 2026, 5)];
        let stats = score_importance(&corpus, 2026).unwrap();
        let future = stats.iter().find(|s| s.topic_name == "Future").unwrap();
        let now = stats.iter().find(|s| s.topic_name == "Now").unwrap();
        assert!(future.importance_score >= 0.0);
        assert!(now.importance_score > future.importance_score);
    }

    #[test]
    fn conflicting_topic_names_are_rejected() {
        let corpus = vec![question(1, "A", 2024, 5), question(1, "Renamed", 2024, 5)];
        let result = score_importance(&corpus, 2026);
        assert!(matches!(result, Err(AppError::DataIntegrity(_))));
    }
}
