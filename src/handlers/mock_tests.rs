// src/handlers/mock_tests.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::{error::AppError, models::answer::MockTestSubmission};

/// Records a completed mock test.
///
/// * Verifies the student exists.
/// * Inserts one `test_results` row plus one `student_answers` row per
///   answer, all in a single transaction.
pub async fn submit_mock_test(
    State(pool): State<PgPool>,
    Json(payload): Json<MockTestSubmission>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let student: Option<i64> = sqlx::query_scalar("SELECT id FROM students WHERE id = $1")
        .bind(payload.student_id)
        .fetch_optional(&pool)
        .await?;

    if student.is_none() {
        return Err(AppError::NotFound("Student not found".to_string()));
    }

    let mut tx = pool.begin().await?;

    let test_id: i64 =
        sqlx::query_scalar("INSERT INTO test_results (student_id) VALUES ($1) RETURNING id")
            .bind(payload.student_id)
            .fetch_one(&mut *tx)
            .await?;

    for ans in &payload.answers {
        sqlx::query(
            "INSERT INTO student_answers (test_result_id, question_id, is_correct, time_taken_seconds)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(test_id)
        .bind(ans.question_id)
        .bind(ans.is_correct)
        .bind(ans.time_taken_seconds)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            // Postgres error code for foreign key violation is 23503
            if e.to_string().contains("foreign key") || e.to_string().contains("23503") {
                AppError::BadRequest(format!("Question {} does not exist", ans.question_id))
            } else {
                tracing::error!("Failed to store answer: {:?}", e);
                AppError::from(e)
            }
        })?;
    }

    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit mock test {}: {:?}", test_id, e);
        AppError::from(e)
    })?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "status": "success",
            "test_id": test_id
        })),
    ))
}
