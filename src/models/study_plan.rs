// src/models/study_plan.rs

use serde::{Deserialize, Serialize};

/// Actionable bucket assigned to each topic after ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Study Now")]
    StudyNow,
    #[serde(rename = "Revise Later")]
    ReviseLater,
    #[serde(rename = "Deprioritize")]
    Deprioritize,
    #[serde(rename = "Mastered")]
    Mastered,
}

/// One ranked entry of a study plan.
///
/// All three scores live in [0, 1]. `priority_score` is importance scaled
/// by the learner's competence gap.
#[derive(Debug, Clone, Serialize)]
pub struct TopicPriority {
    pub topic_name: String,
    pub subject: String,
    pub importance_score: f64,
    pub mastery_score: f64,
    pub priority_score: f64,
    pub recommendation: Recommendation,
}

/// Response envelope for `GET /api/study-plan/{student_id}`.
#[derive(Debug, Serialize)]
pub struct StudyPlan {
    pub student_id: i64,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub priorities: Vec<TopicPriority>,
}
