mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    API_KEY_ENV_VAR, DatabaseSettings, ExtractionSettings, LlmSettings, LoggingSettings,
    PdfExtractionSettings, ServerSettings, Settings, resolve_api_key,
};
