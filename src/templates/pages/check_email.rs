use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn check_email_page(email: &str) -> Markup {
    desktop_layout(
        "Check your email",
        None,
        html! {
            main class="container narrow" {
                div class="card" {
                    h1 { "Check your email" }
                    p {
                        "We sent a sign-in link to " strong { (email) } "."
                    }
                    p class="text-muted" { "The link expires in 15 minutes. You can close this tab." }
                }
            }
        },
    )
}
