use crate::dto::question_dto::CreateQuestionPayload;
use crate::error::{Error, Result};
use crate::models::question::Question;
use sqlx::PgPool;

pub const QUESTIONS_PER_PAGE: i64 = 10;

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
}

pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: i64,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One fixed-size page ordered by id, 1-indexed, plus the total row
    /// count across all pages.
    pub async fn list_page(&self, page: Option<i64>) -> Result<QuestionPage> {
        let page = page.unwrap_or(1).max(1);
        // Saturate so an absurd page value lands past the data instead of
        // overflowing the offset.
        let offset = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(QUESTIONS_PER_PAGE)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        // Page 1 on an empty table is an empty success; any later page
        // past the data is a miss.
        if questions.is_empty() && page > 1 {
            return Err(Error::NotFound(format!("no questions on page {}", page)));
        }

        Ok(QuestionPage { questions, total })
    }

    pub async fn create(&self, payload: &CreateQuestionPayload) -> Result<Question> {
        if !(1..=5).contains(&payload.difficulty) {
            return Err(Error::Unprocessable(format!(
                "difficulty must be between 1 and 5, got {}",
                payload.difficulty
            )));
        }

        let known: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = $1")
            .bind(payload.category)
            .fetch_one(&self.pool)
            .await?;
        if known == 0 {
            return Err(Error::Unprocessable(format!(
                "unsupported category {}",
                payload.category
            )));
        }

        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&payload.question)
        .bind(&payload.answer)
        .bind(payload.category)
        .bind(payload.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    /// Removes the single row; NotFound when the id never existed.
    pub async fn delete(&self, id: i32) -> Result<i32> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("question {} does not exist", id)));
        }

        Ok(id)
    }

    /// Case-insensitive substring match on the question text. No pagination.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let pattern = format!("%{}%", term);
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }
}
