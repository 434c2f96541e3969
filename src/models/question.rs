// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// One exam question joined to its topic and subject.
///
/// Raw input row of the scoring pipeline: one per question ever recorded,
/// across all subjects. `topic_name` and `subject_name` are functionally
/// dependent on `topic_id` and must be consistent across rows.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionRecord {
    pub question_id: i64,
    pub year: i32,
    pub marks: i32,
    pub topic_id: i64,
    pub topic_name: String,
    pub subject_name: String,
}

/// DTO for a single question inside a question-paper upload.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UploadQuestionRequest {
    #[validate(length(min = 1, max = 100))]
    pub subject: String,
    #[validate(length(min = 1, max = 100))]
    pub topic: String,
    #[validate(length(min = 1, max = 1000))]
    pub content: String,
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
    #[validate(range(min = 1, max = 100))]
    pub marks: i32,
    #[validate(length(min = 1, max = 20))]
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_difficulty() -> String {
    "Medium".to_string()
}

/// DTO for a bulk question-paper upload.
#[derive(Debug, Deserialize, Validate)]
pub struct QuestionBulkUpload {
    #[validate(length(min = 1, message = "At least one question is required."))]
    pub questions: Vec<UploadQuestionRequest>,
}
