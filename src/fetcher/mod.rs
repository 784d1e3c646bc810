mod fetch_error;
pub mod models;
mod webhook;

pub use fetch_error::FetchError;
pub use models::{MarketData, RawListing};
pub use webhook::{MarketSource, WebhookClient};
