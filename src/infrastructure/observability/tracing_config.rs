use crate::presentation::config::{Environment, LoggingSettings};

const DEFAULT_FILTER: &str = "info,quizgen=debug,tower_http=debug";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    /// Used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        let default_filter = if settings.level.trim().is_empty() {
            DEFAULT_FILTER.to_string()
        } else {
            settings.level.clone()
        };

        Self {
            environment,
            json_format: settings.enable_json,
            default_filter,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}
