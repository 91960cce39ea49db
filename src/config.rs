// src/config.rs
use crate::db::connection::Database;
use std::env;

/// Everything read from the environment at startup. Built once in main
/// and passed down explicitly; nothing else in the codebase touches env.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    /// Key for the geo-directory open-data API. Absent key means the
    /// aggregation pipeline short-circuits to the static seed set.
    pub directory_api_key: Option<String>,
    pub directory_base_url: String,
    /// Key for the prompt-generation service (geocoding, suggestions).
    pub prompt_api_key: Option<String>,
    pub prompt_base_url: String,
    /// Optional: transactional mail. Without it magic links are logged.
    pub brevo_api_key: Option<String>,
    pub sender_email: String,
    pub sender_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("FARMSTAND_DB").unwrap_or_else(|_| "farmstand.sqlite3".to_string()),
            directory_api_key: non_empty(env::var("FARMSTAND_DIRECTORY_API_KEY").ok()),
            directory_base_url: env::var("FARMSTAND_DIRECTORY_URL")
                .unwrap_or_else(|_| "https://www.usdalocalfoodportal.com/api".to_string()),
            prompt_api_key: non_empty(env::var("FARMSTAND_PROMPT_API_KEY").ok()),
            prompt_base_url: env::var("FARMSTAND_PROMPT_URL")
                .unwrap_or_else(|_| "https://api.promptrelay.dev/v1".to_string()),
            brevo_api_key: non_empty(env::var("BREVO_API_KEY").ok()),
            sender_email: env::var("FARMSTAND_SENDER_EMAIL")
                .unwrap_or_else(|_| "hello@farmstand.local".to_string()),
            sender_name: env::var("FARMSTAND_SENDER_NAME")
                .unwrap_or_else(|_| "Farmstand".to_string()),
        }
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

/// Shared per-process context handed to every request handler.
pub struct AppContext {
    pub db: Database,
    pub cfg: Config,
}
