pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{
    category_service::CategoryService, question_service::QuestionService,
    quiz_service::QuizService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub category_service: CategoryService,
    pub question_service: QuestionService,
    pub quiz_service: QuizService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let category_service = CategoryService::new(pool.clone());
        let question_service = QuestionService::new(pool.clone());
        let quiz_service = QuizService::new(pool.clone());

        Self {
            pool,
            category_service,
            question_service,
            quiz_service,
        }
    }
}
