use std::sync::Arc;

use crate::config::Settings;
use crate::reporter::Reporter;
use crate::translate::{GeminiClient, OpenAiClient};

/// Shared application state. Provider clients are process-wide singletons
/// constructed once here with their credentials injected.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub openai: Arc<OpenAiClient>,
    pub gemini: Arc<GeminiClient>,
    pub reporter: Arc<Reporter>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let http = reqwest::Client::new();

        let openai = Arc::new(OpenAiClient::new(
            http.clone(),
            settings.openai_base_url.clone(),
            settings.openai_api_key.clone(),
        ));
        let gemini = Arc::new(GeminiClient::new(
            http.clone(),
            settings.gemini_base_url.clone(),
            settings.google_api_key.clone(),
        ));
        let reporter = Arc::new(Reporter::new(http, settings.report_url()));

        Self {
            settings,
            openai,
            gemini,
            reporter,
        }
    }
}
