use maud::{html, Markup};

/// Small headline-number tile used on the dashboard and hot-zones views.
pub fn stat_card(title: &str, value: &str, description: &str) -> Markup {
    html! {
        section class="card stat-card" {
            p class="stat-title" { (title) }
            p class="stat-value" { (value) }
            p class="stat-description" { (description) }
        }
    }
}
