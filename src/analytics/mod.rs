//! Study-priority scoring pipeline.
//!
//! Raw question and answer records go in, a ranked and categorized study
//! plan comes out. Every stage is a pure transformation over the two record
//! slices plus the injected current year: aggregation, normalization,
//! importance and mastery scoring, merge, rank.

pub mod importance;
pub mod mastery;
pub mod normalize;
pub mod priority;

use crate::error::AppError;
use crate::models::answer::AnswerRecord;
use crate::models::question::QuestionRecord;
use crate::models::study_plan::TopicPriority;

/// Computes the ranked study plan for one learner.
///
/// An empty question corpus yields an empty plan. A learner with no
/// recorded answers gets zero mastery on every topic, which maximizes each
/// topic's priority. `current_year` anchors the recency decay and must be
/// supplied by the caller so the scoring itself stays clock-free.
pub fn build_study_plan(
    questions: &[QuestionRecord],
    answers: &[AnswerRecord],
    current_year: i32,
) -> Result<Vec<TopicPriority>, AppError> {
    if questions.is_empty() {
        return Ok(Vec::new());
    }

    let stats = importance::score_importance(questions, current_year)?;
    let mastery = mastery::score_mastery(answers);

    Ok(priority::rank_topics(stats, &mastery))
}
