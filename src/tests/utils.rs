use crate::app::App;
use crate::domain::Listing;
use crate::fetcher::{FetchError, MarketData, MarketSource};
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::json;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A listing in `neighborhood` with an address of `"<neighborhood>, Springfield"`.
pub fn listing(neighborhood: &str, price: Option<f64>, bedrooms: Option<f64>) -> Listing {
    Listing {
        address: Some(format!("{neighborhood}, Springfield")),
        price_raw: price.map(|p| format!("${p}")),
        price,
        bedrooms_raw: bedrooms.map(|b| b.to_string()),
        bedrooms,
        neighborhood: Some(neighborhood.to_string()),
        ..Default::default()
    }
}

/// Seven listings: three in Maple Heights, two in Riverside, one without a
/// neighborhood and one studio whose bedroom count isn't numeric.
pub fn sample_market() -> serde_json::Value {
    json!({
        "listings": [
            {"address": "Maple Heights, Springfield, IL", "price": "$450,000", "bedrooms": "3",
             "bathrooms": "2", "sqft": "1,850", "property_type": "Single Family"},
            {"address": "Maple Heights, Springfield", "price": "$390,000+", "bedrooms": "2",
             "bathrooms": "1", "property_type": "Condo"},
            {"address": "Maple Heights, Springfield", "price": "$510,000", "bedrooms": 4,
             "bathrooms": 3, "property_type": "Single Family"},
            {"address": "Riverside, Springfield", "price": "$275,000", "bedrooms": "2",
             "property_type": "Condo"},
            {"address": "Riverside, Springfield", "price": "Contact agent", "bedrooms": "3",
             "property_type": "Single Family"},
            {"address": "Lakeview Estates", "price": "$1,200,000", "bedrooms": "5",
             "property_type": "Single Family"},
            {"address": "Oak \"Grove\", Springfield", "price": "$300,000", "bedrooms": "Studio",
             "property_type": "Condo"}
        ],
        "analysis": "Inventory is tight; prices up 3%."
    })
}

/// Serves a fixed document, or fails every fetch when `body` is `None`.
pub struct StubSource {
    body: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MarketSource for StubSource {
    fn cache_key(&self) -> &str {
        "stub"
    }

    fn fetch(&self) -> Result<MarketData, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.body {
            Some(body) => MarketData::from_json(body),
            None => Err(FetchError::Network("connection refused".into())),
        }
    }
}

/// An app backed by `StubSource`, plus a counter of upstream fetches.
pub fn test_app(body: Option<serde_json::Value>) -> (App, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = StubSource {
        body: body.map(|b| b.to_string()),
        calls: Arc::clone(&calls),
    };
    (App::new(Box::new(source), Duration::from_secs(600)), calls)
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get(app: &App, uri: &str) -> Response {
    handle(request(Method::GET, uri), app).expect("Handler failed")
}

pub fn read_bytes(resp: &mut Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn read_body(resp: &mut Response) -> String {
    String::from_utf8(read_bytes(resp)).expect("body was not UTF-8")
}

pub fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .unwrap_or_else(|| panic!("missing header {name}"))
        .to_str()
        .unwrap()
}
