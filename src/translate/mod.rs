pub mod dispatcher;
pub mod error;
pub mod gemini;
pub mod interface;
pub mod openai;

pub use dispatcher::dispatch;
pub use error::ProviderError;
pub use gemini::GeminiClient;
pub use interface::{Language, Provider, TranslationRequest};
pub use openai::OpenAiClient;
