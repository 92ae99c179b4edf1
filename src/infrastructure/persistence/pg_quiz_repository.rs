use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{QuizRepository, RepositoryError};
use crate::domain::{Quiz, QuizId};

pub struct PgQuizRepository {
    pool: PgPool,
}

impl PgQuizRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn query_failed(e: sqlx::Error) -> RepositoryError {
    RepositoryError::QueryFailed(e.to_string())
}

#[async_trait]
impl QuizRepository for PgQuizRepository {
    #[instrument(
        skip(self, quiz),
        fields(name = %quiz.name, question_count = quiz.questions.len())
    )]
    async fn save(&self, quiz: &Quiz) -> Result<QuizId, RepositoryError> {
        let quiz_id = Uuid::new_v4();

        let mut tx = self.pool.begin().await.map_err(query_failed)?;

        sqlx::query(
            r#"
            INSERT INTO quizzes (id, name, description)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(quiz_id)
        .bind(&quiz.name)
        .bind(&quiz.description)
        .execute(&mut *tx)
        .await
        .map_err(query_failed)?;

        for (question_position, question) in quiz.questions.iter().enumerate() {
            let question_id = Uuid::new_v4();

            sqlx::query(
                r#"
                INSERT INTO questions (id, quiz_id, position, question_text)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(question_id)
            .bind(quiz_id)
            .bind(question_position as i32)
            .bind(&question.question_text)
            .execute(&mut *tx)
            .await
            .map_err(query_failed)?;

            for (answer_position, answer) in question.answers.iter().enumerate() {
                sqlx::query(
                    r#"
                    INSERT INTO answers (id, question_id, position, answer_text, is_correct)
                    VALUES ($1, $2, $3, $4, $5)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(question_id)
                .bind(answer_position as i32)
                .bind(&answer.answer_text)
                .bind(answer.is_correct)
                .execute(&mut *tx)
                .await
                .map_err(query_failed)?;
            }
        }

        tx.commit().await.map_err(query_failed)?;

        Ok(QuizId::from_uuid(quiz_id))
    }
}
