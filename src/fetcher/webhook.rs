// webhook.rs
use crate::fetcher::{FetchError, MarketData};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const USER_AGENT: &str = concat!("listings_dashboard/", env!("CARGO_PKG_VERSION"));

// Error bodies can be whole HTML pages; keep log lines readable.
const MAX_ERROR_BODY: usize = 200;

/// Anything that can produce one complete market document per call.
pub trait MarketSource: Send + Sync {
    /// Identifies the data this source returns, used as the cache key.
    fn cache_key(&self) -> &str;

    fn fetch(&self) -> Result<MarketData, FetchError>;
}

pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl MarketSource for WebhookClient {
    fn cache_key(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<MarketData, FetchError> {
        let start = Instant::now();
        info!(url = %self.url, "fetching market data");

        let resp = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();

        // Read the whole body before touching it.
        let text = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(%status, elapsed = ?start.elapsed(), "webhook returned an error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let data = MarketData::from_json(&text)?;

        info!(
            listings = data.listings.len(),
            has_analysis = data.analysis.is_some(),
            elapsed = ?start.elapsed(),
            "market data fetched"
        );

        Ok(data)
    }
}
