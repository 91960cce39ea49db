// client.rs
use crate::config::Config;
use crate::directory::error::DirectoryError;
use crate::directory::models::{DirectoryResponse, RawListing};
use crate::directory::Directory;
use crate::domain::listing::GeoPoint;
use reqwest::blocking::Client;
use std::time::Duration;

// Bounds one attempt; one slow directory must not stall the whole fan-out.
const REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_ATTEMPTS: u64 = 3;
const RETRY_DELAY_MS: u64 = 250;

/// One network query against a single listing directory. The seam the
/// aggregator fans out over; tests substitute a stub implementation.
pub trait DirectorySource {
    fn fetch(
        &self,
        directory: Directory,
        center: GeoPoint,
        radius_miles: f64,
    ) -> Result<Vec<RawListing>, DirectoryError>;
}

pub struct DirectoryClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl DirectoryClient {
    /// Fails with a config error when the API key is missing, before any
    /// network traffic happens.
    pub fn from_config(cfg: &Config) -> Result<Self, DirectoryError> {
        let api_key = cfg.directory_api_key.clone().ok_or_else(|| {
            DirectoryError::Config("FARMSTAND_DIRECTORY_API_KEY is not set".into())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: cfg.directory_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn try_fetch(
        &self,
        directory: Directory,
        center: GeoPoint,
        radius_miles: f64,
    ) -> Result<Vec<RawListing>, DirectoryError> {
        let url = format!("{}/{}", self.base_url, directory.slug());

        let resp = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(&[
                ("x", center.lon),
                ("y", center.lat),
                ("radius", radius_miles),
            ])
            .send()
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(DirectoryError::Http(
                status.as_u16(),
                format!("{}: {}", directory.slug(), snippet(&text)),
            ));
        }

        let parsed: DirectoryResponse = serde_json::from_str(&text)
            .map_err(|e| DirectoryError::Deserialize(format!("{}: {e}", directory.slug())))?;

        // An empty or absent data array is a valid empty result, not a failure.
        Ok(parsed.data.unwrap_or_default())
    }
}

impl DirectorySource for DirectoryClient {
    fn fetch(
        &self,
        directory: Directory,
        center: GeoPoint,
        radius_miles: f64,
    ) -> Result<Vec<RawListing>, DirectoryError> {
        let mut last_err = None;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.try_fetch(directory, center, radius_miles) {
                Ok(records) => return Ok(records),
                // Only transport errors are worth retrying; HTTP and
                // parse errors repeat deterministically.
                Err(e @ DirectoryError::Network(_)) => {
                    eprintln!("⚠️ {} attempt {attempt} failed: {e}", directory.slug());
                    last_err = Some(e);
                    std::thread::sleep(Duration::from_millis(RETRY_DELAY_MS * attempt));
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err
            .unwrap_or_else(|| DirectoryError::Network("directory retry loop exhausted".into())))
    }
}

fn snippet(body: &str) -> &str {
    let end = body
        .char_indices()
        .nth(200)
        .map(|(i, _)| i)
        .unwrap_or(body.len());
    &body[..end]
}
