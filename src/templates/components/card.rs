use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn metric_card(label: &str, value: &str, delta: Option<i64>) -> Markup {
    html! {
        div class="card metric-card" {
            div { (label) }
            div class="metric-value" { (value) }
            @if let Some(delta) = delta {
                div class="delta" { (format!("{delta:+}")) }
            }
        }
    }
}
