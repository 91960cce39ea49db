use crate::prompts::client::{PromptClient, PromptError};
use serde::{Deserialize, Serialize};

const DISCOVER_PRODUCE_TEMPLATE: &str = "You are a helpful assistant for a farm-to-table app. \
Based on the following user preferences, suggest 3-5 seasonal products they should look for at \
their local farms or markets. Time of Year: {{time_of_year}}. Geographic Area: \
{{geographic_area}}. Taste Preferences: {{taste_preferences}}. Cooking Habits: \
{{cooking_habits}}. Tailor the suggestions to what is likely to be fresh in their area.";

#[derive(Debug, Serialize)]
pub struct DiscoverProduceInput {
    pub time_of_year: String,
    pub geographic_area: String,
    pub taste_preferences: String,
    pub cooking_habits: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DiscoverProduceOutput {
    pub suggested_products: String,
    pub reasoning: String,
}

pub fn discover_produce(
    client: &PromptClient,
    input: &DiscoverProduceInput,
) -> Result<DiscoverProduceOutput, PromptError> {
    client.generate(DISCOVER_PRODUCE_TEMPLATE, input)
}
