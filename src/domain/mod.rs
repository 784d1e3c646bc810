pub mod aggregate;
pub mod coerce;
pub mod dataset;
pub mod distribution;
pub mod filter;
pub mod listing;
pub mod metrics;
pub mod pipeline_error;
pub mod sort;

pub use aggregate::{by_neighborhood, AggregateRow};
pub use dataset::{Dataset, View};
pub use distribution::{bedroom_counts, price_histogram, HistogramBin, PRICE_BINS};
pub use filter::{FilterOptions, FilterSpec, Selection};
pub use listing::Listing;
pub use metrics::MetricsSnapshot;
pub use pipeline_error::PipelineError;
pub use sort::{sort_and_paginate, SortKey, DEFAULT_PAGE_SIZE};
