use crate::config::Config;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::error::Error;
use std::fmt;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug)]
pub enum PromptError {
    Config(String),
    Network(String),
    Api(u16, String),
    Decode(String),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Config(msg) => write!(f, "Prompt config error: {msg}"),
            PromptError::Network(msg) => write!(f, "Prompt network error: {msg}"),
            PromptError::Api(status, msg) => write!(f, "Prompt API error {status}: {msg}"),
            PromptError::Decode(msg) => write!(f, "Prompt decode error: {msg}"),
        }
    }
}

impl Error for PromptError {}

/// Client for the structured-generation endpoint: POST a template plus a
/// typed input object, get back JSON matching the declared output type.
pub struct PromptClient {
    client: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl PromptClient {
    pub fn from_config(cfg: &Config) -> Result<Self, PromptError> {
        let api_key = cfg
            .prompt_api_key
            .clone()
            .ok_or_else(|| PromptError::Config("FARMSTAND_PROMPT_API_KEY is not set".into()))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| PromptError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: cfg.prompt_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// One generation round trip. The output type drives the schema the
    /// service is asked to honor.
    pub fn generate<I: Serialize, O: DeserializeOwned>(
        &self,
        template: &str,
        input: &I,
    ) -> Result<O, PromptError> {
        let body = json!({
            "template": template,
            "input": input,
            "format": "json",
        });

        let resp = self
            .client
            .post(format!("{}/generate", self.base_url))
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .map_err(|e| PromptError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| PromptError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(PromptError::Api(status.as_u16(), text));
        }

        serde_json::from_str(&text).map_err(|e| PromptError::Decode(e.to_string()))
    }
}
