// src/handlers/questions.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::{error::AppError, models::question::QuestionBulkUpload};

/// Bulk-uploads exam questions.
///
/// Subjects and topics are created on first sight, then each question is
/// attached to its topic. The whole upload runs in one transaction, so a
/// bad row rolls back the batch.
pub async fn upload_questions(
    State(pool): State<PgPool>,
    Json(payload): Json<QuestionBulkUpload>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    for q in &payload.questions {
        if let Err(validation_errors) = q.validate() {
            return Err(AppError::BadRequest(validation_errors.to_string()));
        }
    }

    let mut tx = pool.begin().await?;
    let mut count = 0u32;

    for q in &payload.questions {
        let subject_id: i64 = match sqlx::query_scalar("SELECT id FROM subjects WHERE name = $1")
            .bind(&q.subject)
            .fetch_optional(&mut *tx)
            .await?
        {
            Some(id) => id,
            None => {
                sqlx::query_scalar("INSERT INTO subjects (name) VALUES ($1) RETURNING id")
                    .bind(&q.subject)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        let topic_id: i64 =
            match sqlx::query_scalar("SELECT id FROM topics WHERE name = $1 AND subject_id = $2")
                .bind(&q.topic)
                .bind(subject_id)
                .fetch_optional(&mut *tx)
                .await?
            {
                Some(id) => id,
                None => {
                    sqlx::query_scalar(
                        "INSERT INTO topics (name, subject_id) VALUES ($1, $2) RETURNING id",
                    )
                    .bind(&q.topic)
                    .bind(subject_id)
                    .fetch_one(&mut *tx)
                    .await?
                }
            };

        sqlx::query(
            "INSERT INTO questions (content, year, marks, difficulty, topic_id)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&q.content)
        .bind(q.year)
        .bind(q.marks)
        .bind(&q.difficulty)
        .bind(topic_id)
        .execute(&mut *tx)
        .await?;

        count += 1;
    }

    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit question upload: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "questions_uploaded": count
    })))
}
