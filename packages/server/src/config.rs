//! Process configuration loaded from the environment.

use anyhow::{Context, Result};

/// Server configuration.
///
/// Loaded once at startup. A missing `GEMINI_API_KEY` is a fatal error:
/// the process refuses to start rather than silently running degraded.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key (required)
    pub gemini_api_key: String,

    /// Gemini model name (default: gemini-2.5-flash)
    pub gemini_model: String,

    /// Port to listen on (default: 8000)
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment, reading `.env` if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .context("GEMINI_API_KEY not found in environment variables")?;

        let gemini_model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| "gemini-2.5-flash".to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a valid port number")?,
            Err(_) => 8000,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model,
            port,
        })
    }
}
