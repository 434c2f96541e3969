// src/seed.rs

use sqlx::PgPool;

const SUBJECTS: [(&str, [&str; 3]); 2] = [
    ("Mathematics", ["Algebra", "Calculus", "Probability"]),
    ("Physics", ["Mechanics", "Electromagnetism", "Optics"]),
];

const YEARS: [i32; 3] = [2023, 2024, 2025];
const MARKS: [i32; 3] = [2, 5, 10];
const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

/// Seeds a demo dataset: two subjects with three topics each, five
/// questions per topic, and one mock test simulating a student who is weak
/// at Calculus, strong at Algebra, and mixed elsewhere.
///
/// Skipped entirely when any student already exists, so restarts do not
/// duplicate data. Values cycle deterministically, which keeps seeded
/// study plans reproducible across runs.
pub async fn seed_demo_data(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM students LIMIT 1")
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        tracing::info!("Demo data already present, skipping seed.");
        return Ok(());
    }

    tracing::info!("Seeding demo data...");

    let student_id: i64 = sqlx::query_scalar("INSERT INTO students (name) VALUES ($1) RETURNING id")
        .bind("John Doe")
        .fetch_one(pool)
        .await?;

    let mut question_ids: Vec<(i64, &str)> = Vec::new();

    for (subject_name, topic_names) in SUBJECTS {
        let subject_id: i64 =
            sqlx::query_scalar("INSERT INTO subjects (name) VALUES ($1) RETURNING id")
                .bind(subject_name)
                .fetch_one(pool)
                .await?;

        for topic_name in topic_names {
            let topic_id: i64 = sqlx::query_scalar(
                "INSERT INTO topics (name, subject_id) VALUES ($1, $2) RETURNING id",
            )
            .bind(topic_name)
            .bind(subject_id)
            .fetch_one(pool)
            .await?;

            for i in 0..5usize {
                let question_id: i64 = sqlx::query_scalar(
                    "INSERT INTO questions (content, year, marks, difficulty, topic_id)
                     VALUES ($1, $2, $3, $4, $5) RETURNING id",
                )
                .bind(format!("Question {} about {}", i + 1, topic_name))
                .bind(YEARS[i % YEARS.len()])
                .bind(MARKS[i % MARKS.len()])
                .bind(DIFFICULTIES[i % DIFFICULTIES.len()])
                .bind(topic_id)
                .fetch_one(pool)
                .await?;

                question_ids.push((question_id, topic_name));
            }
        }
    }

    // One mock test covering every seeded question.
    let test_id: i64 =
        sqlx::query_scalar("INSERT INTO test_results (student_id) VALUES ($1) RETURNING id")
            .bind(student_id)
            .fetch_one(pool)
            .await?;

    for (i, (question_id, topic_name)) in question_ids.iter().enumerate() {
        let is_correct = match *topic_name {
            "Calculus" => i % 5 == 0,
            "Algebra" => i % 5 != 0,
            _ => i % 2 == 0,
        };

        sqlx::query(
            "INSERT INTO student_answers (test_result_id, question_id, is_correct, time_taken_seconds)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(test_id)
        .bind(*question_id)
        .bind(is_correct)
        .bind(30 + (i as i32 * 7) % 90)
        .execute(pool)
        .await?;
    }

    tracing::info!(
        "Seeding complete: {} questions, 1 mock test.",
        question_ids.len()
    );
    Ok(())
}
