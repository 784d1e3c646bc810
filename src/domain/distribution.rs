// src/domain/distribution.rs

use crate::domain::dataset::View;

pub const PRICE_BINS: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram of known prices between the observed min and max.
/// The max lands in the last bin. A single distinct price gives one bin.
pub fn price_histogram(view: &View<'_>, bins: usize) -> Vec<HistogramBin> {
    let prices: Vec<f64> = view.prices().collect();
    let (Some(min), Some(max)) = (
        prices.iter().copied().reduce(f64::min),
        prices.iter().copied().reduce(f64::max),
    ) else {
        return Vec::new();
    };

    let width = (max - min) / bins as f64;
    if min == max || bins <= 1 || !width.is_finite() {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: prices.len(),
        }];
    }

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for price in prices {
        let slot = (((price - min) / width) as usize).min(bins - 1);
        out[slot].count += 1;
    }

    out
}

/// Number of listings per known bedroom count, ascending by bedrooms.
pub fn bedroom_counts(view: &View<'_>) -> Vec<(f64, usize)> {
    let mut values: Vec<f64> = view.bedrooms().collect();
    values.sort_by(f64::total_cmp);

    let mut out: Vec<(f64, usize)> = Vec::new();
    for value in values {
        match out.last_mut() {
            Some((last, n)) if *last == value => *n += 1,
            _ => out.push((value, 1)),
        }
    }
    out
}
