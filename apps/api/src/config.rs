use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::models::document::TemplateId;

/// Application configuration loaded from environment variables.
///
/// The API key is optional: without it the editor works and every suggestion
/// request answers with a placeholder instead of calling the backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub suggestion_timeout: Duration,
    pub default_template: TemplateId,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: optional_env("API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            suggestion_timeout: Duration::from_secs(
                std::env::var("SUGGESTION_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse::<u64>()
                    .context("SUGGESTION_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            default_template: std::env::var("DEFAULT_TEMPLATE")
                .unwrap_or_else(|_| "classic".to_string())
                .parse::<TemplateId>()
                .map_err(|e| anyhow!("DEFAULT_TEMPLATE: {e}"))?,
        })
    }
}

/// Unset and blank values both count as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
