use crate::domain::{
    AggregateRow, Dataset, FilterOptions, FilterSpec, HistogramBin, Listing, MetricsSnapshot,
    SortKey, View,
};
use crate::templates::components::{
    bedroom_distribution, card, format_currency, format_number, metric_card, price_distribution,
};
use crate::templates::desktop_layout;
use chrono::NaiveDateTime;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub options: FilterOptions,
    pub spec: FilterSpec,
    pub sort: SortKey,
    pub show: usize,

    /// The unfiltered dataset.
    pub dataset: &'a Dataset,
    pub metrics: MetricsSnapshot,
    pub histogram: Vec<HistogramBin>,
    pub bedroom_counts: Vec<(f64, usize)>,
    pub neighborhoods: Vec<AggregateRow>,
    /// Sorted and paginated.
    pub listings: View<'a>,

    /// Query string carried over to the export links.
    pub export_query: String,
    pub analysis: Option<&'a str>,
    pub fetched_at: NaiveDateTime,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Real Estate Market Dashboard",
        html! {
            div class="layout" {
                aside class="sidebar" { (controls(vm)) }

                main class="content" {
                    @if vm.dataset.is_empty() {
                        (card("Market Overview", html! { p { "No listings data available" } }))
                    } @else {
                        (overview(vm))
                    }

                    @if let Some(analysis) = vm.analysis {
                        (card("AI Market Analysis", html! { pre { (analysis) } }))
                    }

                    hr;
                    p { "Last updated: " (vm.fetched_at.format("%Y-%m-%d %H:%M:%S")) }
                }
            }
        },
    )
}

fn controls(vm: &DashboardVm) -> Markup {
    html! {
        section class="card" {
            h3 { "Controls" }
            form action="/refresh" method="post" {
                button type="submit" { "Refresh Data" }
            }
        }

        form class="card" action="/" method="get" {
            h3 { "Filters" }
            input type="hidden" name="filtered" value="1";

            label for="price_min" { "Min price ($)" }
            input type="number" step="any" id="price_min" name="price_min"
                min=(vm.options.price_min) max=(vm.options.price_max) value=(vm.spec.price_min);

            label for="price_max" { "Max price ($)" }
            input type="number" step="any" id="price_max" name="price_max"
                min=(vm.options.price_min) max=(vm.options.price_max) value=(vm.spec.price_max);

            fieldset {
                legend { "Bedrooms" }
                @for beds in &vm.options.bedrooms {
                    label {
                        input type="checkbox" name="bedrooms" value=(beds)
                            checked[vm.spec.bedrooms.is_selected(beds)];
                        " " (format_number(*beds))
                    }
                    br;
                }
            }

            fieldset {
                legend { "Property Type" }
                @for kind in &vm.options.property_types {
                    label {
                        input type="checkbox" name="property_type" value=(kind)
                            checked[vm.spec.property_types.is_selected(kind)];
                        " " (kind)
                    }
                    br;
                }
            }

            label for="sort" { "Sort by" }
            select id="sort" name="sort" {
                @for key in SortKey::ALL {
                    option value=(key) selected[key == vm.sort] { (key.label()) }
                }
            }

            label for="show" { "Show listings" }
            input type="number" id="show" name="show" min="1" value=(vm.show);

            button type="submit" { "Apply" }
        }
    }
}

fn overview(vm: &DashboardVm) -> Markup {
    let m = &vm.metrics;

    let avg_price = m
        .mean_price
        .filter(|p| *p > 0.0)
        .map(format_currency)
        .unwrap_or_else(|| "N/A".into());
    let avg_beds = m
        .mean_bedrooms
        .filter(|b| *b > 0.0)
        .map(|b| format!("{b:.1}"))
        .unwrap_or_else(|| "N/A".into());
    let range = match (m.min_price, m.max_price) {
        (Some(lo), Some(hi)) => format!("{} - {}", format_currency(lo), format_currency(hi)),
        _ => "N/A".into(),
    };

    html! {
        h2 { "Market Overview" }
        div class="metrics" {
            (metric_card("Total Listings", &m.count.to_string(), m.count_delta))
            (metric_card("Average Price", &avg_price, None))
            (metric_card("Avg Bedrooms", &avg_beds, None))
            (metric_card("Price Range", &range, None))
        }

        @if vm.listings.is_empty() {
            (card("Property Listings", html! { p { "No listings match the current filters" } }))
        } @else {
            h2 { "Market Analysis" }
            div class="metrics" style="grid-template-columns: 1fr 1fr;" {
                section class="card" { (price_distribution(&vm.histogram)) }
                section class="card" { (bedroom_distribution(&vm.bedroom_counts)) }
            }

            (card("Average Price by Neighborhood (min 3 listings)", neighborhood_table(&vm.neighborhoods)))

            h2 { "Property Listings" }
            p { "Showing " (vm.listings.len()) " of " (m.count) ", sorted by " (vm.sort.label()) }
            @for listing in vm.listings.iter() {
                (listing_card(listing))
            }
        }

        (card("Export Data", html! {
            a href=(format!("/export.csv?{}", vm.export_query)) { "Download CSV" }
            " · "
            a href=(format!("/export.xlsx?{}", vm.export_query)) { "Download XLSX" }
        }))
    }
}

fn neighborhood_table(rows: &[AggregateRow]) -> Markup {
    html! {
        @if rows.is_empty() {
            p { "No neighborhood has enough listings yet." }
        } @else {
            table {
                thead { tr { th { "Neighborhood" } th { "Average Price" } th { "Listings" } } }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.neighborhood) }
                            td { (format_currency(row.mean_price)) }
                            td { (row.count) }
                        }
                    }
                }
            }
        }
    }
}

fn listing_card(listing: &Listing) -> Markup {
    let or_na = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".into());

    html! {
        div class="card listing-card" {
            h4 { (or_na(&listing.address)) }
            p { strong { "Price: " } (or_na(&listing.price_raw)) }
            p {
                strong { "Details: " }
                (or_na(&listing.bedrooms_raw)) " bed • "
                (or_na(&listing.bathrooms_raw)) " bath • "
                (or_na(&listing.property_type))
            }
            @if let Some(sqft) = &listing.sqft_raw {
                p { strong { "Square Feet: " } (sqft) }
            }
        }
    }
}
