use crate::auth::sessions::SessionUser;
use crate::prompts::crops::CropSuggestionsOutput;
use crate::templates::{alert, desktop_layout};
use maud::{html, Markup};

pub struct SuggestionsVm {
    pub result: Option<CropSuggestionsOutput>,
    pub error: Option<String>,
}

pub fn suggestions_page(vm: &SuggestionsVm, user: &SessionUser) -> Markup {
    desktop_layout(
        "Crop Suggestions",
        Some(user),
        html! {
            main class="container narrow" {
                h1 { "Smart Crop Suggestions" }
                p class="text-muted" {
                    "Describe your conditions and we'll suggest what to plant next."
                }

                @if let Some(err) = &vm.error {
                    (alert(err))
                }

                form action="/dashboard/suggestions" method="post" class="card" {
                    label for="geographic_area" { "Geographic area" }
                    input type="text" name="geographic_area" id="geographic_area" required
                        placeholder="e.g. Central Valley, California";

                    label for="time_of_year" { "Time of year" }
                    input type="text" name="time_of_year" id="time_of_year" required
                        placeholder="e.g. Spring";

                    label for="weather_patterns" { "Recent weather patterns" }
                    textarea name="weather_patterns" id="weather_patterns" rows="2" required
                        placeholder="e.g. Mild winter, early warm spells" {}

                    label for="trending_preferences" { "What customers are asking for" }
                    textarea name="trending_preferences" id="trending_preferences" rows="2" required
                        placeholder="e.g. Heirloom tomatoes, unusual greens" {}

                    label for="farm_history" { "Farm history (optional)" }
                    textarea name="farm_history" id="farm_history" rows="2"
                        placeholder="Past crops and yields" {}

                    button type="submit" { "Suggest crops" }
                }

                @if let Some(result) = &vm.result {
                    section class="card" {
                        h3 { "Suggested crops" }
                        p { (result.suggested_crops) }
                        h3 { "Why" }
                        p { (result.reasoning) }
                    }
                }
            }
        },
    )
}
