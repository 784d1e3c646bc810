// app.rs
use crate::cache::TtlCache;
use crate::domain::Dataset;
use crate::fetcher::{MarketData, MarketSource};
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Everything one successful fetch produced.
#[derive(Debug)]
pub struct MarketSnapshot {
    pub dataset: Dataset,
    /// Free text from upstream, shown as-is.
    pub analysis: Option<String>,
    pub fetched_at: NaiveDateTime,
}

impl MarketSnapshot {
    pub fn from_market_data(data: MarketData, fetched_at: NaiveDateTime) -> Self {
        Self {
            dataset: Dataset::from_raw(&data.listings),
            analysis: data.analysis,
            fetched_at,
        }
    }
}

/// Shared state handed to every request handler.
pub struct App {
    source: Box<dyn MarketSource>,
    cache: TtlCache<MarketSnapshot>,
}

impl App {
    pub fn new(source: Box<dyn MarketSource>, cache_ttl: Duration) -> Self {
        Self {
            source,
            cache: TtlCache::new(cache_ttl),
        }
    }

    /// The current snapshot, fetching a new one when the cached copy is
    /// missing or stale. `None` means upstream gave us nothing usable.
    pub fn snapshot(&self) -> Option<Arc<MarketSnapshot>> {
        let key = self.source.cache_key();

        if let (Some(snapshot), true) = self.cache.get(key) {
            debug!("market cache hit");
            return Some(snapshot);
        }

        debug!("market cache miss");

        match self.source.fetch() {
            Ok(data) => {
                let snapshot = MarketSnapshot::from_market_data(data, Local::now().naive_local());
                Some(self.cache.insert(key, snapshot))
            }
            Err(e) => {
                warn!(error = %e, "market data unavailable");
                None
            }
        }
    }

    /// Forget the cached snapshot; the next request fetches a fresh one.
    pub fn refresh(&self) {
        self.cache.invalidate();
        info!("market cache invalidated");
    }
}
