use crate::prompts::client::{PromptClient, PromptError};
use serde::{Deserialize, Serialize};

const CROP_SUGGESTIONS_TEMPLATE: &str = "You are an expert agricultural advisor. Based on the \
following information, provide a list of suggested crops for the farmer to plant and a brief \
explanation of your reasoning. Weather Patterns: {{weather_patterns}}. Time of Year: \
{{time_of_year}}. Trending Customer Preferences: {{trending_preferences}}. Geographic Area: \
{{geographic_area}}. Farm History (if available): {{farm_history}}.";

#[derive(Debug, Serialize)]
pub struct CropSuggestionsInput {
    pub weather_patterns: String,
    pub time_of_year: String,
    pub trending_preferences: String,
    pub geographic_area: String,
    pub farm_history: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CropSuggestionsOutput {
    pub suggested_crops: String,
    pub reasoning: String,
}

pub fn crop_suggestions(
    client: &PromptClient,
    input: &CropSuggestionsInput,
) -> Result<CropSuggestionsOutput, PromptError> {
    client.generate(CROP_SUGGESTIONS_TEMPLATE, input)
}
