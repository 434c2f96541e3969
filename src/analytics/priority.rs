// src/analytics/priority.rs

use std::collections::HashMap;

use crate::analytics::importance::TopicStats;
use crate::analytics::mastery::TopicMastery;
use crate::models::study_plan::{Recommendation, TopicPriority};

/// Mastery above this level marks a topic as mastered regardless of rank.
pub const MASTERED_THRESHOLD: f64 = 0.9;
/// Percentile rank below which a topic lands in "Study Now".
pub const STUDY_NOW_CUTOFF: f64 = 0.20;
/// Percentile rank below which a topic lands in "Revise Later".
pub const REVISE_LATER_CUTOFF: f64 = 0.70;

/// Merges importance with mastery, ranks by priority, and assigns a
/// recommendation to every topic.
///
/// Topics without a mastery aggregate get mastery 0.0: never attempted
/// means maximal competence gap. `priority = importance * (1 - mastery)`.
/// The sort is stable, so equal priorities keep their aggregation order.
/// Categorization is rank-based, bucketing by index over the total count,
/// never by raw score thresholds.
pub fn rank_topics(
    stats: Vec<TopicStats>,
    mastery: &HashMap<i64, TopicMastery>,
) -> Vec<TopicPriority> {
    let mut merged: Vec<TopicPriority> = stats
        .into_iter()
        .map(|s| {
            let mastery_score = mastery
                .get(&s.topic_id)
                .map_or(0.0, |m| m.adjusted_mastery);
            TopicPriority {
                topic_name: s.topic_name,
                subject: s.subject_name,
                importance_score: s.importance_score,
                mastery_score,
                priority_score: s.importance_score * (1.0 - mastery_score),
                // Replaced once ranks are known.
                recommendation: Recommendation::Deprioritize,
            }
        })
        .collect();

    merged.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

    let topic_count = merged.len();
    for (rank_index, entry) in merged.iter_mut().enumerate() {
        entry.recommendation = categorize(
            entry.priority_score,
            entry.mastery_score,
            rank_index,
            topic_count,
        );
    }

    merged
}

/// Override precedence: mastered beats everything, a dead-zero priority is
/// always deprioritized, and only then does percentile rank decide.
fn categorize(
    priority: f64,
    mastery: f64,
    rank_index: usize,
    topic_count: usize,
) -> Recommendation {
    if mastery > MASTERED_THRESHOLD {
        return Recommendation::Mastered;
    }
    if priority == 0.0 {
        return Recommendation::Deprioritize;
    }

    let rank_pct = rank_index as f64 / topic_count as f64;
    if rank_pct < STUDY_NOW_CUTOFF {
        Recommendation::StudyNow
    } else if rank_pct < REVISE_LATER_CUTOFF {
        Recommendation::ReviseLater
    } else {
        Recommendation::Deprioritize
    }
}
