use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub bind_addr: SocketAddr,
    pub fetch_timeout: Duration,
    pub cache_ttl: Duration,
    pub max_workers: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            webhook_url: env::var("MARKET_WEBHOOK_URL")
                .context("MARKET_WEBHOOK_URL must be set")?,
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
                .parse()
                .context("BIND_ADDR must be a socket address like 127.0.0.1:3000")?,
            fetch_timeout: Duration::from_secs(
                env::var("FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            cache_ttl: Duration::from_secs(
                env::var("CACHE_TTL_SECS")
                    .unwrap_or_else(|_| "600".to_string())
                    .parse()
                    .context("CACHE_TTL_SECS must be a whole number of seconds")?,
            ),
            max_workers: env::var("MAX_WORKERS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .context("MAX_WORKERS must be a valid number")?,
        })
    }
}
