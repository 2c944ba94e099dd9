use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::category_dto::CategoryListResponse,
    dto::question_dto::CategoryQuestionsResponse,
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories as an id-to-label map", body = CategoryListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state.category_service.list_all().await?;
    Ok(Json(CategoryListResponse::from(categories)))
}

/// All questions in one category, with the category's label echoed back as
/// `current_category`. Unknown category ids are a 404 before any question
/// query runs.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 404, description = "Category not found")
    )
)]
#[axum::debug_handler]
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let category = state.category_service.get_by_id(category_id).await?;
    let questions = state.question_service.by_category(category_id).await?;
    let total_questions = questions.len() as i64;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category.category_type,
    }))
}
