use tracing::{debug, info};
use uuid::Uuid;

use crate::reporter::TranslationRecord;
use crate::state::AppState;

use super::error::ProviderError;
use super::gemini;
use super::interface::{Provider, TranslationRequest};

/// System instruction for the chat completion providers.
pub fn chat_system_prompt(language: &str) -> String {
    format!("Translate this sentence into {language}.")
}

/// Run one end-to-end translation attempt against the selected provider.
///
/// The caller has already rejected empty messages; this function is never
/// invoked with one. On success a best-effort log write is spawned as a
/// detached task whose outcome the caller never observes.
pub async fn dispatch(
    state: &AppState,
    request: &TranslationRequest,
) -> Result<String, ProviderError> {
    let dispatch_id = Uuid::new_v4();
    info!(
        "dispatch {}: provider={} language={}",
        dispatch_id,
        request.provider.as_str(),
        request.language.as_str()
    );

    let translated = match request.provider {
        Provider::Gpt35Turbo | Provider::Gpt4 | Provider::Gpt4Turbo => {
            let system = chat_system_prompt(request.language.as_str());
            state
                .openai
                .chat_completion(request.provider.as_str(), &system, &request.message)
                .await?
        }
        // The deepl option was wired to the Gemini path in the original app
        // and never reached a DeepL backend. Kept as-is; see DESIGN.md.
        Provider::Gemini | Provider::Deepl => {
            let prompt = gemini::build_prompt(&request.message, request.language.as_str());
            state.gemini.generate_content(&prompt).await?
        }
    };

    debug!("dispatch {} succeeded ({} chars)", dispatch_id, translated.len());

    let reporter = state.reporter.clone();
    let record = TranslationRecord {
        original_message: request.message.clone(),
        translated_message: translated.clone(),
        language: request.language.as_str().to_string(),
        model: request.provider.as_str().to_string(),
    };
    tokio::spawn(async move {
        reporter.report(&record).await;
    });

    Ok(translated)
}
