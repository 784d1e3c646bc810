use crate::domain::HistogramBin;
use crate::templates::components::format::{format_currency, format_number};
use maud::{html, Markup};

// Chart rendering proper belongs to the browser; these are plain bar lists.

fn bar(label: String, count: usize, max: usize) -> Markup {
    let width = if max == 0 { 0 } else { count * 100 / max };
    html! {
        tr {
            td style="white-space: nowrap;" { (label) }
            td style="width: 70%;" {
                div class="bar" style=(format!("width: {width}%;")) {}
            }
            td { (count) }
        }
    }
}

pub fn price_distribution(bins: &[HistogramBin]) -> Markup {
    let max = bins.iter().map(|b| b.count).max().unwrap_or(0);
    html! {
        h3 { "Price Distribution" }
        @if bins.is_empty() {
            p { "No prices to chart." }
        } @else {
            table {
                @for b in bins {
                    (bar(format!("{} - {}", format_currency(b.lower), format_currency(b.upper)), b.count, max))
                }
            }
        }
    }
}

pub fn bedroom_distribution(counts: &[(f64, usize)]) -> Markup {
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    html! {
        h3 { "Listings by Number of Bedrooms" }
        @if counts.is_empty() {
            p { "No bedroom data to chart." }
        } @else {
            table {
                @for (beds, n) in counts {
                    (bar(format!("{} bed", format_number(*beds)), *n, max))
                }
            }
        }
    }
}
