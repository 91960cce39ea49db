use crate::auth::sessions::SessionUser;
use crate::domain::listing::Listing;
use crate::templates::{alert, desktop_layout, farm_card};
use maud::{html, Markup};

pub struct ExploreVm {
    pub listings: Vec<Listing>,
    pub notice: Option<String>,
    /// True when the guest slice was truncated and a signup nudge makes
    /// sense.
    pub show_signup_cta: bool,
    pub zip: Option<String>,
}

pub fn explore_page(vm: &ExploreVm, user: Option<&SessionUser>) -> Markup {
    desktop_layout(
        "Farms & Markets",
        user,
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Farms & Markets" }
                    p class="text-muted" { "Discover fresh produce from local growers near you." }
                }

                form action="/explore" method="get" class="search-form" {
                    label for="zip" { "Search by zip code" }
                    input type="text" name="zip" id="zip" placeholder="e.g. 90012"
                        value=[vm.zip.as_deref()];
                    button type="submit" { "Search" }
                }

                @if let Some(notice) = &vm.notice {
                    (alert(notice))
                }

                div class="listing-results" {
                    @for listing in &vm.listings {
                        (farm_card(listing))
                    }

                    @if vm.show_signup_cta {
                        div class="card signup-cta" {
                            h3 { "Want to see more?" }
                            p class="text-muted" {
                                "Create an account to view all local farms and unlock exclusive features."
                            }
                            a href="/login" { button { "Sign Up Now" } }
                        }
                    }

                    @if vm.listings.is_empty() && vm.notice.is_none() {
                        div class="card empty-state" {
                            h3 { "No Farms Found" }
                            p class="text-muted" {
                                "We couldn't find any farms for this search. Try a wider radius or another zip code."
                            }
                        }
                    }
                }
            }
        },
    )
}
