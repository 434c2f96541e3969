// src/models/answer.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// One learner answer joined to the topic of the answered question.
///
/// The only facts the mastery estimator needs: which topic, and whether
/// the answer was correct.
#[derive(Debug, Clone, FromRow)]
pub struct AnswerRecord {
    pub is_correct: bool,
    pub topic_id: i64,
}

/// DTO for a single answer inside a mock-test submission.
#[derive(Debug, Deserialize, Serialize)]
pub struct AnswerSubmission {
    pub question_id: i64,
    pub is_correct: bool,
    pub time_taken_seconds: Option<i32>,
}

/// DTO for submitting a completed mock test.
#[derive(Debug, Deserialize, Validate)]
pub struct MockTestSubmission {
    pub student_id: i64,
    #[validate(length(min = 1, message = "No answers submitted."))]
    pub answers: Vec<AnswerSubmission>,
}
