// src/domain/sort.rs

use crate::domain::dataset::View;
use crate::domain::listing::Listing;
use crate::domain::pipeline_error::PipelineError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Default page size for the listings table.
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Price,
    Bedrooms,
    Address,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Price, SortKey::Bedrooms, SortKey::Address];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Bedrooms => "bedrooms",
            SortKey::Address => "address",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Price => "Price",
            SortKey::Bedrooms => "Bedrooms",
            SortKey::Address => "Address",
        }
    }

    /// Descending order. Unknown numbers go last; a missing address
    /// compares as the empty string.
    fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            SortKey::Price => descending_nulls_last(a.price, b.price),
            SortKey::Bedrooms => descending_nulls_last(a.bedrooms, b.bedrooms),
            SortKey::Address => {
                let a = a.address.as_deref().unwrap_or("");
                let b = b.address.as_deref().unwrap_or("");
                b.cmp(a)
            }
        }
    }
}

impl FromStr for SortKey {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" | "price_numeric" => Ok(SortKey::Price),
            "bedrooms" | "bedrooms_numeric" => Ok(SortKey::Bedrooms),
            "address" => Ok(SortKey::Address),
            other => Err(PipelineError::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn descending_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts a copy of `view` descending by `key` and keeps the first `count`
/// rows. Ties keep their view order.
pub fn sort_and_paginate<'a>(
    view: &View<'a>,
    key: SortKey,
    count: usize,
) -> Result<View<'a>, PipelineError> {
    if count == 0 {
        return Err(PipelineError::InvalidPageSize);
    }

    let mut rows = view.rows().to_vec();
    rows.sort_by(|a, b| key.compare(a, b));
    rows.truncate(count);

    Ok(View::new(rows))
}
