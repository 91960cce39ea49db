use crate::prompts::client::{PromptClient, PromptError};
use serde::{Deserialize, Serialize};

const GEOCODE_TEMPLATE: &str = "You are a geocoding expert. Given the following zip code, \
provide the corresponding latitude and longitude. Zip Code: {{zip_code}}. \
Only return the numerical latitude and longitude.";

#[derive(Debug, Serialize)]
pub struct GeocodeInput {
    pub zip_code: String,
}

/// Coordinates may be absent when the zip code is unknown; callers fall
/// back to the default search center.
#[derive(Debug, Deserialize)]
pub struct GeocodeOutput {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub fn geocode(client: &PromptClient, zip_code: &str) -> Result<GeocodeOutput, PromptError> {
    client.generate(
        GEOCODE_TEMPLATE,
        &GeocodeInput {
            zip_code: zip_code.trim().to_string(),
        },
    )
}
