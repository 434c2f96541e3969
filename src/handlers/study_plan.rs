// src/handlers/study_plan.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::{Datelike, Utc};
use sqlx::PgPool;

use crate::{analytics, error::AppError, models::study_plan::StudyPlan, store};

/// Computes the ranked study plan for one student.
///
/// Performs the two reads (question corpus, learner answers) and runs the
/// pure scoring pipeline. An empty corpus short-circuits to an empty plan
/// before the answers are ever fetched. A student with no recorded answers
/// gets zero mastery everywhere, so an unknown id is not an error here.
pub async fn get_study_plan(
    State(pool): State<PgPool>,
    Path(student_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store::fetch_question_corpus(&pool).await.map_err(|e| {
        tracing::error!("Failed to fetch question corpus: {:?}", e);
        AppError::from(e)
    })?;

    if questions.is_empty() {
        return Ok(Json(StudyPlan {
            student_id,
            generated_at: Utc::now(),
            priorities: Vec::new(),
        }));
    }

    let answers = store::fetch_learner_answers(&pool, student_id)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch answers for student {}: {:?}",
                student_id,
                e
            );
            AppError::from(e)
        })?;

    // The clock stays at the HTTP boundary; the core only sees the year.
    let current_year = Utc::now().year();
    let priorities = analytics::build_study_plan(&questions, &answers, current_year)?;

    tracing::debug!(
        "Study plan for student {}: {} topics ranked",
        student_id,
        priorities.len()
    );

    Ok(Json(StudyPlan {
        student_id,
        generated_at: Utc::now(),
        priorities,
    }))
}
