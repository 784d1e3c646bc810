// src/domain/aggregate.rs

use crate::domain::dataset::View;
use std::collections::HashMap;

/// Groups smaller than this are too noisy to show.
pub const MIN_GROUP_SIZE: usize = 3;
pub const MAX_GROUPS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub neighborhood: String,
    /// Mean of the known prices, rounded half to even.
    pub mean_price: f64,
    /// Every listing in the group, priced or not.
    pub count: usize,
}

#[derive(Default)]
struct Group<'a> {
    neighborhood: &'a str,
    price_sum: f64,
    priced: usize,
    count: usize,
}

/// Per-neighborhood mean price and count, in first-seen order.
///
/// Listings without a neighborhood are skipped. Groups below
/// `MIN_GROUP_SIZE` are dropped, as are groups with no known price, and
/// at most `MAX_GROUPS` rows are returned.
pub fn by_neighborhood(view: &View<'_>) -> Vec<AggregateRow> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for listing in view.iter() {
        let Some(neighborhood) = listing.neighborhood.as_deref() else {
            continue;
        };

        let slot = *index.entry(neighborhood).or_insert_with(|| {
            groups.push(Group {
                neighborhood,
                ..Default::default()
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.count += 1;
        if let Some(price) = listing.price {
            group.price_sum += price;
            group.priced += 1;
        }
    }

    groups
        .into_iter()
        .filter(|g| g.count >= MIN_GROUP_SIZE && g.priced > 0)
        .take(MAX_GROUPS)
        .map(|g| AggregateRow {
            neighborhood: g.neighborhood.to_string(),
            mean_price: (g.price_sum / g.priced as f64).round_ties_even(),
            count: g.count,
        })
        .collect()
}
