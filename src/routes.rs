// src/routes.rs

use axum::{
    Json, Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{mock_tests, questions, students, study_plan},
    state::AppState,
};

/// Liveness probe for the API root.
async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Study Priority Engine API is running" }))
}

/// Assembles the main application router.
///
/// * Merges all sub-routers (students, questions, mock tests, study plan).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:5173".parse().unwrap(),
        "http://127.0.0.1:5173".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let student_routes = Router::new().route(
        "/",
        post(students::create_student).get(students::list_students),
    );

    let question_routes = Router::new().route("/upload", post(questions::upload_questions));

    let mock_test_routes = Router::new().route("/submit", post(mock_tests::submit_mock_test));

    let study_plan_routes = Router::new().route("/{student_id}", get(study_plan::get_study_plan));

    Router::new()
        .route("/", get(index))
        .nest("/api/students", student_routes)
        .nest("/api/questions", question_routes)
        .nest("/api/mock-tests", mock_test_routes)
        .nest("/api/study-plan", study_plan_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
