// src/domain/filter.rs

use crate::domain::dataset::{Dataset, View};
use crate::domain::listing::Listing;
use crate::domain::pipeline_error::PipelineError;

// Bounds offered when no listing has a known price.
const FALLBACK_PRICE_MIN: f64 = 0.0;
const FALLBACK_PRICE_MAX: f64 = 10_000.0;

/// Which values of a categorical field pass the filter.
///
/// `All` places no constraint at all, unknown values included.
/// `Only` admits listed values only: unknown values never match, and an
/// empty list admits nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    All,
    Only(Vec<T>),
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(allowed) => value.is_some_and(|v| allowed.contains(v)),
        }
    }

    pub fn is_selected(&self, value: &T) -> bool {
        self.admits(Some(value))
    }
}

impl<T: Clone> Selection<T> {
    fn observed(values: &[T]) -> Self {
        if values.is_empty() {
            Selection::All
        } else {
            Selection::Only(values.to_vec())
        }
    }
}

/// Values observed in a dataset, used to build the default filter and to
/// populate the filter form.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub price_min: f64,
    pub price_max: f64,
    /// Distinct known bedroom counts, ascending.
    pub bedrooms: Vec<f64>,
    /// Distinct known property types, in first-seen order.
    pub property_types: Vec<String>,
}

impl FilterOptions {
    pub fn observed(dataset: &Dataset) -> Self {
        let view = dataset.view();

        let (price_min, price_max) = view
            .prices()
            .fold(None, |acc: Option<(f64, f64)>, p| match acc {
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
                None => Some((p, p)),
            })
            .unwrap_or((FALLBACK_PRICE_MIN, FALLBACK_PRICE_MAX));

        let mut bedrooms: Vec<f64> = view.bedrooms().collect();
        bedrooms.sort_by(f64::total_cmp);
        bedrooms.dedup();

        let mut property_types: Vec<String> = Vec::new();
        for kind in view.iter().filter_map(|l| l.property_type.as_ref()) {
            if !property_types.contains(kind) {
                property_types.push(kind.clone());
            }
        }

        Self {
            price_min,
            price_max,
            bedrooms,
            property_types,
        }
    }
}

/// Predicates applied by the dashboard. A listing passes when all three
/// admit it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub price_min: f64,
    pub price_max: f64,
    pub bedrooms: Selection<f64>,
    pub property_types: Selection<String>,
}

impl FilterSpec {
    /// Full price range with every observed bedroom count and property
    /// type selected. Listings with unknown bedrooms or type don't match
    /// an explicit selection, so they drop out here.
    pub fn observed(dataset: &Dataset) -> Self {
        Self::from_options(&FilterOptions::observed(dataset))
    }

    /// A category nobody reported gets no constraint, so a feed without
    /// bedroom counts still shows its listings by default.
    pub fn from_options(options: &FilterOptions) -> Self {
        Self {
            price_min: options.price_min,
            price_max: options.price_max,
            bedrooms: Selection::observed(&options.bedrooms),
            property_types: Selection::observed(&options.property_types),
        }
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if !self.price_min.is_finite() || !self.price_max.is_finite() {
            return Err(PipelineError::InvalidFilterSpec(
                "price bounds must be finite numbers".into(),
            ));
        }
        if self.price_min > self.price_max {
            return Err(PipelineError::InvalidFilterSpec(format!(
                "price_min {} is greater than price_max {}",
                self.price_min, self.price_max
            )));
        }
        Ok(())
    }

    /// Unknown prices are exempt: only a known, out-of-range price
    /// excludes a listing.
    pub fn admits(&self, listing: &Listing) -> bool {
        let price_ok = listing
            .price
            .map_or(true, |p| p >= self.price_min && p <= self.price_max);

        price_ok
            && self.bedrooms.admits(listing.bedrooms.as_ref())
            && self.property_types.admits(listing.property_type.as_ref())
    }

    /// Order-preserving subsequence of `view`.
    pub fn apply<'a>(&self, view: &View<'a>) -> Result<View<'a>, PipelineError> {
        self.validate()?;
        Ok(view.iter().filter(|l| self.admits(l)).collect())
    }
}

#[cfg(test)]
impl FilterSpec {
    /// Lets every listing through.
    pub fn unrestricted() -> Self {
        Self {
            price_min: f64::MIN,
            price_max: f64::MAX,
            bedrooms: Selection::All,
            property_types: Selection::All,
        }
    }
}
