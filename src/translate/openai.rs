use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use super::error::ProviderError;

/// Client for the OpenAI chat completions API.
///
/// Built once at startup with its credential injected and shared through
/// `AppState`; never reconstructed per request.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Build the chat completion body for one translation: a system
    /// instruction plus the raw user message, capped at 100 output tokens
    /// at temperature 0.3.
    pub fn build_request(model: &str, system: &str, user: &str) -> Value {
        json!({
            "model": model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "temperature": 0.3,
            "max_tokens": 100,
        })
    }

    /// Send one chat completion and return the assistant reply with
    /// surrounding whitespace removed.
    pub async fn chat_completion(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingCredential("openai"));
        }

        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = Self::build_request(model, system, user);
        debug!("OpenAI chat completion request: model={}", model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
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
        Self::extract_reply(&payload)
    }

    /// Pull the first choice's message content out of a chat completion
    /// response, trimmed.
    fn extract_reply(payload: &Value) -> Result<String, ProviderError> {
        let content = payload
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| {
                ProviderError::MalformedResponse("no message content in first choice".to_string())
            })?;
        Ok(content.trim().to_string())
    }
}
