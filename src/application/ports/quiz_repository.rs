use async_trait::async_trait;

use crate::domain::{Quiz, QuizId};

use super::RepositoryError;

#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Stores the quiz with its questions and answers and returns the new id.
    async fn save(&self, quiz: &Quiz) -> Result<QuizId, RepositoryError>;
}
