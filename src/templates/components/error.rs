use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Basic error page
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="content" style="max-width: 720px; margin: 2rem auto;" {
                section class="card" {
                    h2 { "Error " (status) }
                    p { (message) }
                    p { a href="/" { "← Back to dashboard" } }
                }
            }
        },
    )
}
