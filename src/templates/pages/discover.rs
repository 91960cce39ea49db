use crate::auth::sessions::SessionUser;
use crate::prompts::discover::DiscoverProduceOutput;
use crate::prompts::recipes::RecipeSuggestionsOutput;
use crate::templates::{alert, desktop_layout};
use maud::{html, Markup};

pub struct DiscoverVm {
    pub produce: Option<DiscoverProduceOutput>,
    pub recipes: Option<RecipeSuggestionsOutput>,
    pub error: Option<String>,
}

pub fn discover_page(vm: &DiscoverVm, user: Option<&SessionUser>) -> Markup {
    desktop_layout(
        "Discover Produce",
        user,
        html! {
            main class="container narrow" {
                h1 { "Discover Seasonal Produce" }
                p class="text-muted" {
                    "Tell us what you like and we'll suggest what to look for at your local market."
                }

                @if let Some(err) = &vm.error {
                    (alert(err))
                }

                form action="/discover" method="post" class="card" {
                    label for="geographic_area" { "Where are you?" }
                    input type="text" name="geographic_area" id="geographic_area" required
                        placeholder="e.g. Los Angeles, CA";

                    label for="time_of_year" { "Time of year" }
                    input type="text" name="time_of_year" id="time_of_year" required
                        placeholder="e.g. Summer";

                    label for="taste_preferences" { "Taste preferences" }
                    textarea name="taste_preferences" id="taste_preferences" rows="2" required
                        placeholder="e.g. I like sweet fruits and spicy vegetables." {}

                    label for="cooking_habits" { "Cooking habits (optional)" }
                    textarea name="cooking_habits" id="cooking_habits" rows="2"
                        placeholder="e.g. Mostly salads and smoothies; grilling on weekends." {}

                    button type="submit" { "Suggest produce" }
                }

                @if let Some(produce) = &vm.produce {
                    section class="card" {
                        h3 { "Try these" }
                        p { (produce.suggested_products) }
                        p class="text-muted" { (produce.reasoning) }

                        form action="/recipes" method="post" {
                            input type="hidden" name="produce" value=(produce.suggested_products);
                            button type="submit" { "Get recipe ideas" }
                        }
                    }
                }

                @if let Some(recipes) = &vm.recipes {
                    section class="card" {
                        h3 { "Recipe ideas" }
                        p { (recipes.recipes) }
                    }
                }
            }
        },
    )
}
