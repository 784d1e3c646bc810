use crate::app::{App, MarketSnapshot};
use crate::domain::{
    bedroom_counts, by_neighborhood, price_histogram, sort_and_paginate, FilterOptions,
    MetricsSnapshot, View, DEFAULT_PAGE_SIZE, PRICE_BINS,
};
use crate::errors::ServerError;
use crate::query::DashboardQuery;
use crate::responses::{
    csv_response, html_response, html_response_with_status, see_other, xlsx_response, ResultResp,
};
use crate::spreadsheets::{export_file_stem, export_listings_xlsx, write_csv_string};
use crate::templates::pages::{dashboard_page, unavailable_page, DashboardVm};
use astra::Request;
use chrono::Local;
use tracing::info;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query();

    match (method, path) {
        ("GET", "/") => dashboard(app, query),
        ("GET", "/export.csv") => export(app, query, ExportFormat::Csv),
        ("GET", "/export.xlsx") => export(app, query, ExportFormat::Xlsx),
        ("POST", "/refresh") => {
            app.refresh();
            see_other("/")
        }
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(app: &App, query: Option<&str>) -> ResultResp {
    let query = DashboardQuery::parse(query)?;

    let Some(snapshot) = app.snapshot() else {
        return html_response_with_status(503, unavailable_page());
    };

    let vm = build_dashboard_vm(&snapshot, &query)?;
    html_response(dashboard_page(&vm))
}

/// Runs the whole pipeline for one page view.
pub fn build_dashboard_vm<'a>(
    snapshot: &'a MarketSnapshot,
    query: &DashboardQuery,
) -> Result<DashboardVm<'a>, ServerError> {
    let dataset = &snapshot.dataset;
    let spec = query.filter_spec(dataset);
    let filtered = spec.apply(&dataset.view())?;

    let show = query
        .show
        .unwrap_or_else(|| filtered.len().clamp(1, DEFAULT_PAGE_SIZE));
    let listings = sort_and_paginate(&filtered, query.sort, show)?;

    Ok(DashboardVm {
        options: FilterOptions::observed(dataset),
        export_query: query.filter_query_string(&spec),
        sort: query.sort,
        show,
        dataset,
        metrics: MetricsSnapshot::against(&filtered, dataset),
        histogram: price_histogram(&filtered, PRICE_BINS),
        bedroom_counts: bedroom_counts(&filtered),
        neighborhoods: by_neighborhood(&filtered),
        listings,
        analysis: snapshot.analysis.as_deref(),
        fetched_at: snapshot.fetched_at,
        spec,
    })
}

enum ExportFormat {
    Csv,
    Xlsx,
}

fn export(app: &App, query: Option<&str>, format: ExportFormat) -> ResultResp {
    let query = DashboardQuery::parse(query)?;

    let Some(snapshot) = app.snapshot() else {
        return html_response_with_status(503, unavailable_page());
    };

    let dataset = &snapshot.dataset;
    let filtered: View<'_> = query.filter_spec(dataset).apply(&dataset.view())?;
    let stem = export_file_stem(Local::now().naive_local());

    info!(rows = filtered.len(), file = %stem, "exporting listings");

    match format {
        ExportFormat::Csv => csv_response(write_csv_string(&filtered)?, &format!("{stem}.csv")),
        ExportFormat::Xlsx => {
            xlsx_response(export_listings_xlsx(&filtered)?, &format!("{stem}.xlsx"))
        }
    }
}
