use crate::assets;
use crate::auth::sessions::SessionUser;
use crate::domain::listing::Listing;
use crate::domain::product;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn farm_detail_page(listing: &Listing, user: Option<&SessionUser>) -> Markup {
    let products: Vec<_> = listing
        .products
        .iter()
        .filter_map(|id| product::find(id))
        .collect();

    desktop_layout(
        &listing.name,
        user,
        html! {
            main class="container" {
                img class="hero-image" src=(listing.hero_url) alt=(listing.name);

                div class="page-header" {
                    h1 { (listing.name) }
                    p class="farm-type" { (listing.farm_type.label()) }
                    p { (listing.bio) }
                    p class="text-sm" { (listing.address) }
                    p class="text-sm" { "★ " (format!("{:.1}", listing.rating)) }
                }

                section class="card" {
                    h3 { "Products" }
                    @if products.is_empty() {
                        p class="text-muted" { "This listing hasn't published a product list yet." }
                    } @else {
                        ul class="product-grid" {
                            @for p in &products {
                                li class="product" {
                                    img src=(assets::product_image_url(p.id)) alt=(p.name) width="120";
                                    strong { (p.name) }
                                    span class="text-sm" { (p.category) }
                                    p class="text-sm" { (p.description) }
                                    span { (format!("${}.{:02}", p.price_cents / 100, p.price_cents % 100)) }
                                }
                            }
                        }
                        @if user.is_some() {
                            a href=(format!("/farm/{}/order", listing.id)) { button { "Place an order" } }
                        } @else {
                            p class="text-muted" { a href="/login" { "Sign in" } " to place an order." }
                        }
                    }
                }
            }
        },
    )
}
