use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use super::error::ProviderError;

/// Generation model the non-chat dispatch path always uses.
pub const GENERATION_MODEL: &str = "gemini-1.5-flash";

/// Client for the Google generative language API (AI Studio endpoint,
/// key passed as a query parameter).
///
/// One instance is built at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Instruction prompt for the generative-text path. Exactly this string,
/// raw message included unquoted.
pub fn build_prompt(message: &str, language: &str) -> String {
    format!("Translate the text: {message} into {language}")
}

impl GeminiClient {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Request content generation for a single prompt string and return the
    /// generated text verbatim (no trimming).
    pub async fn generate_content(&self, prompt: &str) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingCredential("google"));
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, GENERATION_MODEL
        );
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });
        debug!("Gemini generateContent request: model={}", GENERATION_MODEL);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body: payload,
            });
        }

        let payload: Value = serde_json::from_str(&payload)
            .map_err(|e| ProviderError::MalformedResponse(format!("invalid JSON: {e}")))?;
        Self::extract_text(&payload)
    }

    /// Concatenate the text parts of the first candidate, untouched.
    fn extract_text(payload: &Value) -> Result<String, ProviderError> {
        let parts = payload
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
            .ok_or_else(|| {
                ProviderError::MalformedResponse("no content parts in first candidate".to_string())
            })?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect();
        Ok(text)
    }
}
