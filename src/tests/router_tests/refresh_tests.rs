// src/tests/router_tests/refresh_tests.rs

use crate::router::handle;
use crate::tests::utils::{get, header, request, sample_market, test_app};
use http::Method;
use std::sync::atomic::Ordering;

#[test]
fn snapshot_is_cached_until_refresh() {
    let (app, calls) = test_app(Some(sample_market()));

    get(&app, "/");
    get(&app, "/?sort=bedrooms");
    get(&app, "/export.csv");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let resp = handle(request(Method::POST, "/refresh"), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/");

    // Refreshing alone doesn't fetch; the next page view does.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    get(&app, "/");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn failed_fetch_is_not_cached() {
    let (app, calls) = test_app(None);

    assert_eq!(get(&app, "/").status(), 503);
    assert_eq!(get(&app, "/").status(), 503);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn refresh_requires_post() {
    let (app, _) = test_app(Some(sample_market()));
    assert!(handle(request(Method::GET, "/refresh"), &app).is_err());
}
