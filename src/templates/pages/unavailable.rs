use crate::templates::components::card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Shown when the market webhook could not be reached or returned junk.
pub fn unavailable_page() -> Markup {
    desktop_layout(
        "Market data unavailable",
        html! {
            main class="content" style="max-width: 720px; margin: 2rem auto;" {
                (card("Unable to fetch data", html! {
                    p { "The market data service did not return any data. Please try again shortly." }
                    form action="/refresh" method="post" {
                        button type="submit" { "Retry" }
                    }
                }))
            }
        },
    )
}
