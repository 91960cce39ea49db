use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Signup and login are one form: we email a magic link either way.
pub fn login_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Sign In",
        None,
        html! {
            main class="container narrow" {
                h1 { "Sign in or create an account" }
                p class="text-muted" { "We'll email you a one-time sign-in link. No password needed." }

                @if let Some(msg) = error {
                    div class="alert" role="alert" { (msg) }
                }

                form action="/login" method="post" class="card" {
                    label for="email" { "Email" }
                    input type="email" name="email" id="email" required placeholder="you@example.com";

                    fieldset {
                        legend { "I am a…" }
                        label {
                            input type="radio" name="role" value="consumer" checked;
                            " Shopper looking for local food"
                        }
                        label {
                            input type="radio" name="role" value="farmer";
                            " Farmer selling my produce"
                        }
                    }

                    button type="submit" { "Email me a sign-in link" }
                }
            }
        },
    )
}
