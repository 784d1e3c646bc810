// cache.rs
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

// Only the market snapshot lives here, keyed by source.
const MAX_ENTRIES: u64 = 16;

/// Time-limited cache owned by whoever needs it. Values are shared out as
/// `Arc`s so readers never hold the cache while they work.
pub struct TtlCache<T> {
    entries: Cache<String, Arc<T>>,
}

impl<T: Send + Sync + 'static> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        let entries = Cache::builder()
            .max_capacity(MAX_ENTRIES)
            .time_to_live(ttl)
            .build();

        Self { entries }
    }

    /// The stored value, if any, and whether it is still valid. Expired
    /// entries are never returned, so a hit is always valid.
    pub fn get(&self, key: &str) -> (Option<Arc<T>>, bool) {
        match self.entries.get(key) {
            Some(value) => (Some(value), true),
            None => (None, false),
        }
    }

    /// Stores `value`, replacing whatever was there.
    pub fn insert(&self, key: impl Into<String>, value: T) -> Arc<T> {
        let value = Arc::new(value);
        self.entries.insert(key.into(), Arc::clone(&value));
        value
    }

    pub fn invalidate(&self) {
        self.entries.invalidate_all();
    }
}
