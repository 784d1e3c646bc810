pub mod card;
pub mod charts;
pub mod error;
pub mod format;

pub use card::{card, metric_card};
pub use charts::{bedroom_distribution, price_distribution};
pub use error::error_page;
pub use format::{format_currency, format_number};
