use crate::prompts::client::{PromptClient, PromptError};
use serde::{Deserialize, Serialize};

const RECIPE_SUGGESTIONS_TEMPLATE: &str = "You are a creative chef who specializes in simple \
recipes using fresh, seasonal ingredients. A user has the following produce available: \
{{produce}}. Suggest 2-3 simple recipe ideas featuring these ingredients, each with a name and \
a brief description. No full ingredient lists or step-by-step instructions.";

#[derive(Debug, Serialize)]
pub struct RecipeSuggestionsInput {
    pub produce: String,
}

#[derive(Debug, Deserialize)]
pub struct RecipeSuggestionsOutput {
    pub recipes: String,
}

pub fn recipe_suggestions(
    client: &PromptClient,
    produce: &str,
) -> Result<RecipeSuggestionsOutput, PromptError> {
    client.generate(
        RECIPE_SUGGESTIONS_TEMPLATE,
        &RecipeSuggestionsInput {
            produce: produce.to_string(),
        },
    )
}
