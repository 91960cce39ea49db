use crate::auth::sessions::SessionUser;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, user: Option<&SessionUser>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Farmstand" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#3f7d3a"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                    }
                    h3 { "Farmstand" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/explore" { "Explore" } }
                            li { a href="/farms" { "Farms" } }
                            li { a href="/discover" { "Discover" } }
                            @if user.map(|u| u.is_farmer()).unwrap_or(false) {
                                li { a href="/dashboard" { "Dashboard" } }
                            }
                        }
                    }

                    @match user {
                        Some(u) => div class="inline" {
                            span class="text-sm" { (u.email) }
                            form action="/logout" method="post" class="inline" {
                                button type="submit" { "Sign Out" }
                            }
                        },
                        None => a href="/login" class="text-base font-medium hover:text-green-700" { "Login" },
                    }
                }
                (content)
            }
        }
    }
}
