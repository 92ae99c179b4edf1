use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use quizgen::application::ports::{QuizRepository, StructuredGenerator};
use quizgen::application::services::QuizGenerationService;
use quizgen::infrastructure::llm::{MockStructuredGenerator, OpenAiClient};
use quizgen::infrastructure::observability::{TracingConfig, init_tracing};
use quizgen::infrastructure::persistence::{
    MockQuizRepository, PgQuizRepository, create_pool, run_migrations,
};
use quizgen::infrastructure::text_processing::PdfAdapter;
use quizgen::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;
    let scaffold = ScaffoldConfig::from_env();

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let file_loader = Arc::new(PdfAdapter::with_item_separator(
        settings.extraction.pdf.item_separator.clone(),
    ));

    let generator: Arc<dyn StructuredGenerator> = if scaffold.enabled {
        tracing::warn!("Scaffold mode: quizzes come from a mock generator");
        Arc::new(MockStructuredGenerator)
    } else {
        if settings.llm.api_key.is_none() {
            tracing::warn!("No LLM API key configured; generate requests will fail");
        }
        Arc::new(
            OpenAiClient::from_settings(&settings.llm)
                .context("Failed to build LLM HTTP client")?,
        )
    };

    let repository: Arc<dyn QuizRepository> = match (&settings.database.url, scaffold.enabled) {
        (Some(url), false) => {
            let pool = create_pool(url, settings.database.max_connections).await?;
            if settings.database.run_migrations {
                run_migrations(&pool).await?;
            }
            Arc::new(PgQuizRepository::new(pool))
        }
        _ => {
            tracing::warn!("No database configured; quizzes will not be persisted");
            Arc::new(MockQuizRepository)
        }
    };

    let quiz_service = Arc::new(QuizGenerationService::new(
        file_loader,
        generator,
        repository,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        quiz_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
