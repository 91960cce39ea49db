use crate::domain::listing::Listing;
use maud::{html, Markup};

pub fn farm_card(listing: &Listing) -> Markup {
    html! {
        div class="card farm-card" {
            img src=(listing.logo_url) alt=(listing.name) width="96" height="96";
            div class="card-body" {
                h2 {
                    a href=(format!("/farm/{}", listing.id)) { (listing.name) }
                }
                p class="farm-type" { (listing.farm_type.label()) }
                p { (listing.bio) }
                p class="text-sm" { (listing.address) }
                p class="text-sm" {
                    @if listing.rating > 0.0 {
                        "★ " (format!("{:.1}", listing.rating))
                    }
                    @if listing.distance > 0.0 {
                        "  ·  " (format!("{:.1} mi", listing.distance))
                    }
                }
            }
        }
    }
}
