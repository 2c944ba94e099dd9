use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use sqlx::PgPool;
use tower::ServiceExt;

async fn setup() -> (Router, PgPool) {
    dotenvy::dotenv().ok();
    std::env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    let _ = trivia_backend::config::init_config();

    let pool = trivia_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let state = trivia_backend::AppState::new(pool.clone());
    (trivia_backend::routes::router(state), pool)
}

fn marker() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("mk{}", nanos)
}

async fn insert_question(pool: &PgPool, text: &str, category: i32, difficulty: i32) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO questions (question, answer, category, difficulty)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(text)
    .bind("an answer")
    .bind(category)
    .bind(difficulty)
    .fetch_one(pool)
    .await
    .expect("insert question")
}

async fn get(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: JsonValue) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn pagination_caps_at_ten_and_reports_full_total() {
    let (app, pool) = setup().await;
    let m = marker();
    for i in 0..12 {
        insert_question(&pool, &format!("Page filler {} {}", i, m), 1, 1).await;
    }

    let (status, body) = get(&app, "/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let questions = body["questions"].as_array().unwrap();
    assert!(questions.len() <= 10);
    assert!(body["total_questions"].as_i64().unwrap() >= 12);
    assert!(body["current_category"].is_null());
    assert!(body["categories"].is_object());

    // Total stays the full row count regardless of the page requested.
    let (status, page_two) = get(&app, "/questions?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page_two["questions"].as_array().unwrap().len() <= 10);
    assert!(page_two["total_questions"].as_i64().unwrap() >= 12);
}

#[tokio::test]
async fn page_far_beyond_data_is_not_found() {
    let (app, _pool) = setup().await;

    let (status, body) = get(&app, "/questions?page=999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn non_numeric_page_is_an_enveloped_bad_request() {
    let (app, _pool) = setup().await;

    let (status, body) = get(&app, "/questions?page=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 400);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn maximum_page_value_is_a_plain_miss() {
    let (app, _pool) = setup().await;

    // i64::MAX parses fine; the computed offset must not overflow.
    let (status, body) = get(&app, "/questions?page=9223372036854775807").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn create_then_delete_removes_the_row() {
    let (app, _pool) = setup().await;
    let m = marker();

    let (status, created) = send_json(
        &app,
        "POST",
        "/questions",
        json!({
            "question": format!("Created {}?", m),
            "answer": "yes",
            "category": 1,
            "difficulty": 3
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    assert_eq!(created["question"], format!("Created {}?", m));
    assert_eq!(created["answer"], "yes");
    assert_eq!(created["category"], 1);
    assert_eq!(created["difficulty"], 3);
    let id = created["created"].as_i64().unwrap();

    let (status, body) = send_json(&app, "POST", "/questions/search", json!({"searchTerm": m})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 1);

    let (status, deleted) = send_json(
        &app,
        "DELETE",
        &format!("/questions/{}", id),
        json!(null),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["success"], true);
    assert_eq!(deleted["deleted"].as_i64().unwrap(), id);

    // Gone for good.
    let (status, body) = send_json(&app, "POST", "/questions/search", json!({"searchTerm": m})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 0);

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/questions/{}", id),
        json!(null),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn invalid_create_payloads_do_not_insert() {
    let (app, _pool) = setup().await;
    let m = marker();

    // Difficulty out of range.
    let (status, body) = send_json(
        &app,
        "POST",
        "/questions",
        json!({
            "question": format!("Too hard {}?", m),
            "answer": "no",
            "category": 1,
            "difficulty": 6
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 422);

    // Missing answer.
    let (status, body) = send_json(
        &app,
        "POST",
        "/questions",
        json!({
            "question": format!("No answer {}?", m),
            "category": 1,
            "difficulty": 2
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], 400);

    // Empty question text.
    let (status, _body) = send_json(
        &app,
        "POST",
        "/questions",
        json!({
            "question": "",
            "answer": "no",
            "category": 1,
            "difficulty": 2
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown category.
    let (status, body) = send_json(
        &app,
        "POST",
        "/questions",
        json!({
            "question": format!("Orphan {}?", m),
            "answer": "no",
            "category": 999999,
            "difficulty": 2
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], 422);

    // None of the rejected payloads left a row behind.
    let (_, body) = send_json(&app, "POST", "/questions/search", json!({"searchTerm": m})).await;
    assert_eq!(body["total_questions"], 0);
}

#[tokio::test]
async fn search_matches_substring_case_insensitively() {
    let (app, pool) = setup().await;
    let m = marker();

    insert_question(&pool, &format!("Which organ is the LIVER{}?", m), 1, 1).await;
    insert_question(&pool, &format!("Is liver{} street long?", m), 2, 2).await;
    insert_question(&pool, &format!("Unrelated {}x", m), 1, 1).await;

    let term = format!("liver{}", m);
    let (status, body) = send_json(&app, "POST", "/questions/search", json!({"searchTerm": term})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 2);
    assert!(body["current_category"].is_null());
    for question in body["questions"].as_array().unwrap() {
        let text = question["question"].as_str().unwrap().to_lowercase();
        assert!(text.contains(&term.to_lowercase()));
    }
}

#[tokio::test]
async fn search_requires_a_term() {
    let (app, _pool) = setup().await;

    let (status, body) = send_json(&app, "POST", "/questions/search", json!({"searchTerm": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 400);

    let (status, _body) = send_json(&app, "POST", "/questions/search", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn questions_by_category_filters_and_labels() {
    let (app, pool) = setup().await;
    let m = marker();
    insert_question(&pool, &format!("Science thing {}?", m), 1, 1).await;

    let (_, categories) = get(&app, "/categories").await;
    let label = categories["categories"]["1"].as_str().unwrap().to_string();

    let (status, body) = get(&app, "/categories/1/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["current_category"].as_str().unwrap(), label);
    let questions = body["questions"].as_array().unwrap();
    assert!(!questions.is_empty());
    for question in questions {
        assert_eq!(question["category"], 1);
    }
    assert_eq!(
        body["total_questions"].as_i64().unwrap(),
        questions.len() as i64
    );

    let (status, body) = get(&app, "/categories/999999/questions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn list_categories_is_idempotent() {
    let (app, _pool) = setup().await;

    let (status_a, first) = get(&app, "/categories").await;
    let (status_b, second) = get(&app, "/categories").await;
    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(first["success"], true);
    assert!(!first["categories"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_routes_get_the_error_envelope() {
    let (app, _pool) = setup().await;

    let (status, body) = get(&app, "/no/such/route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert!(body["message"].is_string());
}
