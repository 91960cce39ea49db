use crate::auth::sessions::SessionUser;
use crate::domain::farm::FarmProfile;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ProfileVm<'a> {
    pub farm: Option<&'a FarmProfile>,
    pub saved: bool,
}

pub fn profile_page(vm: &ProfileVm, user: &SessionUser) -> Markup {
    desktop_layout(
        "Your Farm Profile",
        Some(user),
        html! {
            main class="container narrow" {
                h1 { "Your Farm Profile" }
                p class="text-muted" {
                    "This information is visible to customers on your farm's public page."
                }

                @if vm.saved {
                    div class="alert success" role="status" { "Profile saved." }
                }

                form action="/dashboard/profile" method="post" class="card" {
                    label for="name" { "Farm Name" }
                    input type="text" name="name" id="name" required minlength="3"
                        placeholder="e.g., Green Valley Greens"
                        value=[vm.farm.map(|f| f.name.as_str())];

                    label for="bio" { "Bio" }
                    textarea name="bio" id="bio" rows="3" maxlength="160"
                        placeholder="Tell everyone what makes your farm special." {
                        @if let Some(f) = vm.farm { (f.bio) }
                    }

                    label for="address" { "Address" }
                    input type="text" name="address" id="address"
                        placeholder="123 Green Valley Rd, Organica, CA"
                        value=[vm.farm.map(|f| f.address.as_str())];

                    button type="submit" { "Save Profile" }
                }
            }
        },
    )
}
