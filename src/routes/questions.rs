use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::category_dto::categories_map,
    dto::question_dto::{
        CreateQuestionPayload, CreatedQuestionResponse, DeletedQuestionResponse,
        QuestionListQuery, QuestionListResponse, SearchPayload, SearchResponse,
    },
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/questions",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 1-indexed, 10 questions per page")
    ),
    responses(
        (status = 200, description = "One page of questions with the full total", body = QuestionListResponse),
        (status = 404, description = "Page beyond the available data")
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    query: std::result::Result<Query<QuestionListQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query.map_err(|err| Error::BadRequest(err.body_text()))?;
    let page = state.question_service.list_page(query.page).await?;
    let categories = state.category_service.list_all().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        categories: categories_map(categories),
        current_category: None,
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 201, description = "Question created", body = CreatedQuestionResponse),
        (status = 400, description = "Missing or empty field"),
        (status = 422, description = "Difficulty out of range or unknown category")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateQuestionPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|err| Error::BadRequest(err.body_text()))?;
    payload.validate()?;
    let question = state.question_service.create(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedQuestionResponse::from(question)),
    ))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedQuestionResponse),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let deleted = state.question_service.delete(question_id).await?;
    Ok(Json(DeletedQuestionResponse {
        success: true,
        deleted,
    }))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchPayload,
    responses(
        (status = 200, description = "Questions matching the term", body = SearchResponse),
        (status = 400, description = "Missing or empty searchTerm")
    )
)]
#[axum::debug_handler]
pub async fn search_questions(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SearchPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|err| Error::BadRequest(err.body_text()))?;
    let term = payload
        .search_term
        .as_deref()
        .filter(|term| !term.is_empty())
        .ok_or_else(|| Error::BadRequest("searchTerm is required".to_string()))?;

    let questions = state.question_service.search(term).await?;
    let total_questions = questions.len() as i64;

    Ok(Json(SearchResponse {
        success: true,
        questions,
        total_questions,
        current_category: None,
    }))
}
