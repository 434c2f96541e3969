// src/store.rs

use sqlx::PgPool;

use crate::models::{answer::AnswerRecord, question::QuestionRecord};

/// Reads the full question corpus with topic and subject identity resolved.
///
/// One of the two reads the pipeline performs per invocation; failures
/// propagate unchanged to the caller.
pub async fn fetch_question_corpus(pool: &PgPool) -> Result<Vec<QuestionRecord>, sqlx::Error> {
    sqlx::query_as::<_, QuestionRecord>(
        r#"
        SELECT
            q.id AS question_id,
            q.year,
            q.marks,
            t.id AS topic_id,
            t.name AS topic_name,
            s.name AS subject_name
        FROM questions q
        JOIN topics t ON q.topic_id = t.id
        JOIN subjects s ON t.subject_id = s.id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Reads every recorded answer for one student, with topic identity
/// resolved through the answered question.
pub async fn fetch_learner_answers(
    pool: &PgPool,
    student_id: i64,
) -> Result<Vec<AnswerRecord>, sqlx::Error> {
    sqlx::query_as::<_, AnswerRecord>(
        r#"
        SELECT sa.is_correct, q.topic_id
        FROM student_answers sa
        JOIN test_results tr ON sa.test_result_id = tr.id
        JOIN questions q ON sa.question_id = q.id
        WHERE tr.student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await
}
