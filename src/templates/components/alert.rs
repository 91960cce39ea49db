use maud::{html, Markup};

/// Notice banner rendered above page content (upstream outages, degraded
/// data, form errors).
pub fn alert(message: &str) -> Markup {
    html! {
        div class="alert" role="alert" {
            strong { "Notice: " }
            span { (message) }
        }
    }
}
