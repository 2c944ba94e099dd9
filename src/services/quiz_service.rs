use crate::error::Result;
use crate::models::question::Question;
use rand::seq::SliceRandom;
use sqlx::PgPool;

#[derive(Clone)]
pub struct QuizService {
    pool: PgPool,
}

impl QuizService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One uniformly-random question from the requested category (0 = all)
    /// that is not in `previous`, or None once the eligible set is empty.
    /// Stateless: the play history lives entirely on the client.
    pub async fn next_question(
        &self,
        category_id: i32,
        previous: &[i32],
    ) -> Result<Option<Question>> {
        let eligible = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1 = 0 OR category = $1)
              AND id != ALL($2)
            "#,
        )
        .bind(category_id)
        .bind(previous.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(eligible.choose(&mut rand::thread_rng()).cloned())
    }
}
