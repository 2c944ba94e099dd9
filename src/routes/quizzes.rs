use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::quiz_dto::{QuizPayload, QuizResponse},
    error::{Error, Result},
    AppState,
};

/// One round of play: the client sends its category filter and the ids it
/// has already seen, and gets back a fresh random question or null once the
/// category is exhausted.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "A random unseen question, or null when exhausted", body = QuizResponse),
        (status = 400, description = "Missing quiz_category or previous_questions")
    )
)]
#[axum::debug_handler]
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuizPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|err| Error::BadRequest(err.body_text()))?;
    let category = payload
        .quiz_category
        .ok_or_else(|| Error::BadRequest("quiz_category is required".to_string()))?;
    let previous = payload
        .previous_questions
        .ok_or_else(|| Error::BadRequest("previous_questions is required".to_string()))?;

    let question = state
        .quiz_service
        .next_question(category.id, &previous)
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
