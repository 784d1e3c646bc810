// src/domain/metrics.rs

use crate::domain::dataset::{Dataset, View};

/// Scalar summary of a view.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub count: usize,
    pub mean_price: Option<f64>,
    pub mean_bedrooms: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// `count - baseline count`, present only when it isn't zero.
    pub count_delta: Option<i64>,
}

impl MetricsSnapshot {
    pub fn compute(view: &View<'_>) -> Self {
        Self {
            count: view.len(),
            mean_price: mean(view.prices()),
            mean_bedrooms: mean(view.bedrooms()),
            min_price: view.prices().reduce(f64::min),
            max_price: view.prices().reduce(f64::max),
            count_delta: None,
        }
    }

    /// Same as `compute`, with the count compared to the unfiltered data.
    pub fn against(view: &View<'_>, baseline: &Dataset) -> Self {
        let delta = view.len() as i64 - baseline.len() as i64;
        Self {
            count_delta: (delta != 0).then_some(delta),
            ..Self::compute(view)
        }
    }
}

pub(crate) fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}
