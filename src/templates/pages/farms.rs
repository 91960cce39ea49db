use crate::auth::sessions::SessionUser;
use crate::domain::listing::Listing;
use crate::templates::{desktop_layout, farm_card};
use maud::{html, Markup};

/// Persisted farm profiles (or the seed set while the table is empty).
pub fn farms_page(listings: &[Listing], user: Option<&SessionUser>) -> Markup {
    desktop_layout(
        "Farms",
        user,
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Our Farms" }
                    p class="text-muted" { "Farm profiles managed by the growers themselves." }
                }

                div class="listing-results" {
                    @for listing in listings {
                        (farm_card(listing))
                    }
                }
            }
        },
    )
}
