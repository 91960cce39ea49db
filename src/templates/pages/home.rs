// templates/pages/home.rs

use crate::auth::sessions::SessionUser;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page(user: Option<&SessionUser>) -> Markup {
    desktop_layout(
        "Home",
        user,
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Fresh from the farm, straight to your table" }
                    p {
                        "Discover local farms and markets near you, browse seasonal produce, "
                        "and order directly from the people who grow it."
                    }
                    div class="hero-actions" {
                        a href="/explore" { button { "Explore farms near you" } }
                        @if user.is_none() {
                            a href="/login" { button { "Create an account" } }
                        }
                    }
                }

                section class="card" {
                    h3 { "Are you a farmer?" }
                    p {
                        "Set up a farm profile, keep it up to date, and get "
                        "crop-planning suggestions tailored to your region."
                    }
                    a href="/login" { "Sign up as a farmer" }
                }
            }
        },
    )
}
