use std::path::PathBuf;

use lovemeet_ai::GeminiConfig;
use lovemeet_ai::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_DB_PATH: &str = "lovemeet.db";
const DEFAULT_BASE_URL_APP: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    /// Origin that share and proposal URLs are built on.
    pub base_url: String,
    pub gemini: GeminiConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let base_url = var("LOVEMEET_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL_APP.into());

        Self {
            db_path: PathBuf::from(var("LOVEMEET_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into())),
            base_url: base_url.trim_end_matches('/').to_string(),
            gemini: GeminiConfig {
                api_key: var("GEMINI_API_KEY").or_else(|| var("API_KEY")),
                model: var("LOVEMEET_GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
                base_url: var("LOVEMEET_GEMINI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            },
        }
    }
}
