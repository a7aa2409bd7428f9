use thiserror::Error;

/// Failures a provider client can produce during one dispatch.
///
/// The HTTP layer collapses every variant into the one generic user-facing
/// message; the distinction only exists for logging.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("no API credential configured for {0}")]
    MissingCredential(&'static str),
}
