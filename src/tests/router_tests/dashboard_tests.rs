// src/tests/router_tests/dashboard_tests.rs

use crate::app::MarketSnapshot;
use crate::domain::{PipelineError, SortKey};
use crate::errors::ServerError;
use crate::fetcher::MarketData;
use crate::query::DashboardQuery;
use crate::responses::error_response;
use crate::router::{build_dashboard_vm, handle};
use crate::tests::utils::{get, read_body, request, sample_market, test_app};
use chrono::NaiveDate;
use http::Method;

fn snapshot() -> MarketSnapshot {
    let data = MarketData::from_json(&sample_market().to_string()).unwrap();
    let fetched_at = NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    MarketSnapshot::from_market_data(data, fetched_at)
}

#[test]
fn dashboard_renders_overview() {
    let (app, _) = test_app(Some(sample_market()));

    let mut resp = get(&app, "/");
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);

    // The studio has no numeric bedroom count, so the default filter drops it.
    assert!(body.contains("Total Listings"));
    assert!(body.contains(r#"<div class="delta">-1</div>"#));
    // (450k + 390k + 510k + 275k + 1.2M) / 5
    assert!(body.contains("$565,000"));
    assert!(body.contains("$275,000 - $1,200,000"));

    assert!(body.contains("<td>Maple Heights</td>"));
    assert!(body.contains("$450,000"));
    assert!(!body.contains("<td>Riverside</td>"));

    assert!(body.contains("Inventory is tight; prices up 3%."));
    assert!(body.contains("Last updated: "));
}

#[test]
fn view_model_sorts_and_paginates() {
    let snapshot = snapshot();
    let query = DashboardQuery::parse(Some("sort=price&show=2")).unwrap();

    let vm = build_dashboard_vm(&snapshot, &query).unwrap();
    let prices: Vec<_> = vm.listings.iter().map(|l| l.price).collect();

    assert_eq!(vm.sort, SortKey::Price);
    assert_eq!(prices, vec![Some(1_200_000.0), Some(510_000.0)]);
    assert_eq!(vm.metrics.count, 6);
    assert_eq!(vm.dataset.len(), 7);
}

#[test]
fn view_model_defaults_page_size_to_filtered_count() {
    let snapshot = snapshot();
    let query = DashboardQuery::parse(Some("sort=address")).unwrap();

    let vm = build_dashboard_vm(&snapshot, &query).unwrap();
    let addresses: Vec<_> = vm
        .listings
        .iter()
        .map(|l| l.address.as_deref().unwrap_or_default())
        .collect();

    assert_eq!(vm.show, 6);
    assert_eq!(addresses.first(), Some(&"Riverside, Springfield"));
    assert_eq!(addresses.last(), Some(&"Lakeview Estates"));
}

#[test]
fn view_model_with_price_filter_keeps_unknown_prices() {
    let snapshot = snapshot();
    let query = DashboardQuery::parse(Some("price_min=300000&price_max=500000")).unwrap();

    let vm = build_dashboard_vm(&snapshot, &query).unwrap();
    let raw: Vec<_> = vm
        .listings
        .iter()
        .map(|l| l.price_raw.as_deref().unwrap_or_default())
        .collect();

    assert_eq!(raw, vec!["$450,000", "$390,000+", "Contact agent"]);
    assert_eq!(vm.metrics.count_delta, Some(-4));
}

#[test]
fn upper_bound_below_every_price_keeps_unpriced_listings() {
    let (app, _) = test_app(Some(sample_market()));

    let mut resp = get(&app, "/?price_max=100000");
    assert_eq!(resp.status(), 200);
    assert!(read_body(&mut resp).contains("Contact agent"));

    let snapshot = snapshot();
    let query = DashboardQuery::parse(Some("price_max=100000")).unwrap();
    let vm = build_dashboard_vm(&snapshot, &query).unwrap();
    let raw: Vec<_> = vm
        .listings
        .iter()
        .map(|l| l.price_raw.as_deref().unwrap_or_default())
        .collect();

    assert_eq!(raw, vec!["Contact agent"]);
}

#[test]
fn explicit_empty_selection_shows_no_listings() {
    let (app, _) = test_app(Some(sample_market()));

    let mut resp = get(&app, "/?filtered=1&property_type=Condo");
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains("No listings match the current filters"));
}

#[test]
fn empty_dataset_renders_empty_state() {
    let (app, _) = test_app(Some(serde_json::json!({ "listings": [] })));

    let mut resp = get(&app, "/");
    assert_eq!(resp.status(), 200);
    assert!(read_body(&mut resp).contains("No listings data available"));
}

#[test]
fn upstream_failure_renders_no_data_page() {
    let (app, _) = test_app(None);

    let mut resp = get(&app, "/");
    assert_eq!(resp.status(), 503);
    assert!(read_body(&mut resp).contains("Unable to fetch data"));
}

#[test]
fn unknown_sort_key_fails_fast() {
    let (app, _) = test_app(Some(sample_market()));

    let err = handle(request(Method::GET, "/?sort=sqft"), &app).unwrap_err();
    assert!(matches!(
        err,
        ServerError::Pipeline(PipelineError::InvalidSortKey(ref key)) if key == "sqft"
    ));

    let mut resp = error_response(err);
    assert_eq!(resp.status(), 400);
    assert!(read_body(&mut resp).contains("sqft"));
}

#[test]
fn bad_filter_parameters_fail_fast() {
    let (app, _) = test_app(Some(sample_market()));

    for uri in ["/?colour=red", "/?price_min=9&price_max=1", "/?show=0", "/?bedrooms=lots"] {
        let err = handle(request(Method::GET, uri), &app).unwrap_err();
        assert_eq!(err.status(), 400, "{uri} should be rejected");
    }
}

#[test]
fn unknown_route_is_not_found() {
    let (app, _) = test_app(Some(sample_market()));

    let err = handle(request(Method::GET, "/nope"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(error_response(err).status(), 404);
}
