mod mock_repository;
mod pg_pool;
mod pg_quiz_repository;

pub use mock_repository::MockQuizRepository;
pub use pg_pool::{create_pool, run_migrations};
pub use pg_quiz_repository::PgQuizRepository;
