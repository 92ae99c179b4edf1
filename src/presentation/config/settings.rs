use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
    pub extraction: ExtractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    pub chat_model: String,
    #[serde(default)]
    pub temperature: Option<f32>,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Without a URL quizzes are not persisted (scaffold storage).
    #[serde(default)]
    pub url: Option<String>,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub pdf: PdfExtractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfExtractionSettings {
    pub max_file_size_mb: usize,
    pub item_separator: String,
}

impl PdfExtractionSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Settings {
    /// Layers built-in defaults, `appsettings.toml`, `appsettings.{env}.toml`
    /// and `APP_*` environment variables (`__` separates nested keys).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("llm.chat_model", "gpt-3.5-turbo-1106")?
            .set_default("llm.request_timeout_seconds", 120_i64)?
            .set_default("database.max_connections", 5_i64)?
            .set_default("database.run_migrations", true)?
            .set_default("logging.level", "info,quizgen=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .set_default("extraction.pdf.max_file_size_mb", 20_i64)?
            .set_default("extraction.pdf.item_separator", " ")?
            .add_source(File::with_name("appsettings").required(false))
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.llm.api_key = resolve_api_key(
            settings.llm.api_key.take(),
            std::env::var(API_KEY_ENV_VAR).ok(),
        );

        Ok(settings)
    }
}

/// The configured key wins unless it is blank, then `OPENAI_API_KEY` is used.
pub fn resolve_api_key(configured: Option<String>, fallback: Option<String>) -> Option<String> {
    let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
    non_blank(configured).or_else(|| non_blank(fallback))
}
