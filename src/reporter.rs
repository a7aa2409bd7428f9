use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One completed translation, as posted to the log endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub original_message: String,
    pub translated_message: String,
    pub language: String,
    pub model: String,
}

/// Fire-and-forget writer of completed translations.
///
/// Spawned detached after a successful dispatch; its failure is intentionally
/// unobservable to the request flow. No retries, no response validation.
#[derive(Debug, Clone)]
pub struct Reporter {
    client: Client,
    url: String,
}

impl Reporter {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }

    /// Post one record. Any failure is logged and swallowed.
    pub async fn report(&self, record: &TranslationRecord) {
        match self.client.post(&self.url).json(record).send().await {
            Ok(response) if !response.status().is_success() => {
                debug!("translation log write returned {}", response.status());
            }
            Ok(_) => {}
            Err(e) => debug!("translation log write failed: {}", e),
        }
    }
}
