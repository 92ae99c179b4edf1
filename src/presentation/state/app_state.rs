use std::sync::Arc;

use crate::application::services::QuizGenerationService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizGenerationService>,
    pub settings: Settings,
}
