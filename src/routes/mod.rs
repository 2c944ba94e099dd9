pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{error::Error, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(categories::questions_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/:id", delete(questions::delete_question))
        .route("/questions/search", post(questions::search_questions))
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(not_found)
        .with_state(state)
}

// Unmatched paths get the same error envelope as everything else.
async fn not_found() -> Error {
    Error::NotFound("resource not found".to_string())
}
