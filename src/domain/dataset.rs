// src/domain/dataset.rs

use crate::domain::listing::Listing;
use crate::fetcher::RawListing;

/// All listings from one fetch, in arrival order. Never mutated after
/// construction; every other stage works on a `View` over it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    listings: Vec<Listing>,
}

impl Dataset {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn from_raw(raw: &[RawListing]) -> Self {
        Self::new(raw.iter().map(Listing::from_raw).collect())
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    #[cfg(test)]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// The unfiltered view, in arrival order.
    pub fn view(&self) -> View<'_> {
        self.listings.iter().collect()
    }
}

/// An ordered projection over a `Dataset`. Only the sequence is owned,
/// the listings are borrowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View<'a> {
    rows: Vec<&'a Listing>,
}

impl<'a> View<'a> {
    pub fn new(rows: Vec<&'a Listing>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Listing> + '_ {
        self.rows.iter().copied()
    }

    pub fn rows(&self) -> &[&'a Listing] {
        &self.rows
    }

    /// Known prices, in view order.
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().filter_map(|l| l.price)
    }

    /// Known bedroom counts, in view order.
    pub fn bedrooms(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().filter_map(|l| l.bedrooms)
    }
}

impl<'a> FromIterator<&'a Listing> for View<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Listing>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
