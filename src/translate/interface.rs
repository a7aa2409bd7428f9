use serde::{Deserialize, Serialize};

/// One submitted translation request. Immutable for the duration of a dispatch.
///
/// The wire field is named `model`, matching the value the form's provider
/// radio group submits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub language: Language,
    pub message: String,
    #[serde(rename = "model")]
    pub provider: Provider,
}

/// Target languages offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Hindi,
    Spanish,
    French,
    Telugu,
    Japanese,
}

impl Language {
    /// Display name, as interpolated into the provider prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Telugu => "Telugu",
            Language::Japanese => "Japanese",
        }
    }
}

/// The closed set of selectable providers. An unrecognized tag is rejected
/// at deserialization, so no dispatch path has to handle one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "deepl")]
    Deepl,
}

impl Provider {
    /// Wire tag, which for the chat family doubles as the model name sent
    /// to the chat completions API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gpt35Turbo => "gpt-3.5-turbo",
            Provider::Gpt4 => "gpt-4",
            Provider::Gpt4Turbo => "gpt-4-turbo",
            Provider::Gemini => "gemini",
            Provider::Deepl => "deepl",
        }
    }

    pub fn is_chat_family(&self) -> bool {
        matches!(
            self,
            Provider::Gpt35Turbo | Provider::Gpt4 | Provider::Gpt4Turbo
        )
    }
}
