/// Scaffold mode swaps the model and the database for in-process mocks so the
/// upload path can be exercised without credentials.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldConfig {
    pub enabled: bool,
}

impl ScaffoldConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var("SCAFFOLD_MODE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
