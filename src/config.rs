use anyhow::Result;
use config::{Environment, File};
use serde::{Deserialize, Serialize};

/// Service configuration.
///
/// Loaded once at startup from an optional `config.yaml` overlaid with
/// `TRANSLATE_`-prefixed environment variables; the conventional unprefixed
/// credential names (`OPENAI_API_KEY`, `GOOGLE_API_KEY`, `DEEPL_API_KEY`)
/// are honored on top of both. A missing credential is not an error here;
/// it surfaces as a dispatch-time failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub openai_api_key: String,
    #[serde(default)]
    pub google_api_key: String,
    #[serde(default)]
    pub deepl_api_key: String,
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
    /// Where completed translations are reported. Defaults to this
    /// service's own `/api/translations` endpoint.
    #[serde(default)]
    pub report_url: Option<String>,
    #[serde(default = "default_translations_log")]
    pub translations_log: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_openai_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_translations_log() -> String {
    "translations.jsonl".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Settings {
    pub fn load() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

        let mut settings: Settings = config::Config::builder()
            .add_source(File::with_name(&path).required(false))
            .add_source(Environment::with_prefix("TRANSLATE"))
            .build()?
            .try_deserialize()?;

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            settings.openai_api_key = key;
        }
        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            settings.google_api_key = key;
        }
        if let Ok(key) = std::env::var("DEEPL_API_KEY") {
            settings.deepl_api_key = key;
        }

        Ok(settings)
    }

    /// Resolved target for the Result Reporter.
    pub fn report_url(&self) -> String {
        if let Some(url) = &self.report_url {
            return url.clone();
        }
        let host = if self.host == "0.0.0.0" {
            "127.0.0.1"
        } else {
            self.host.as_str()
        };
        format!("http://{}:{}/api/translations", host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            openai_api_key: String::new(),
            google_api_key: String::new(),
            deepl_api_key: String::new(),
            openai_base_url: default_openai_base_url(),
            gemini_base_url: default_gemini_base_url(),
            report_url: None,
            translations_log: default_translations_log(),
            static_dir: default_static_dir(),
        }
    }
}
