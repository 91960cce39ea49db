use crate::auth::sessions::SessionUser;
use crate::domain::farm::FarmProfile;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn dashboard_page(user: &SessionUser, farm: Option<&FarmProfile>) -> Markup {
    desktop_layout(
        "Dashboard",
        Some(user),
        html! {
            main class="container" {
                h1 { "Dashboard" }
                p { "Signed in as " strong { (user.email) } }

                section class="card" {
                    h3 { "Your farm" }
                    @match farm {
                        Some(f) => {
                            p { strong { (f.name) } }
                            p { (f.bio) }
                            p class="text-sm" { (f.address) }
                        },
                        None => p class="text-muted" {
                            "No profile yet. Customers can't find you until you create one."
                        },
                    }
                    a href="/dashboard/profile" { "Edit farm profile" }
                }

                section class="card" {
                    h3 { "Crop planning" }
                    p class="text-muted" {
                        "Get planting suggestions based on your region, the season, and what customers are asking for."
                    }
                    a href="/dashboard/suggestions" { "Get crop suggestions" }
                }
            }
        },
    )
}
