// src/domain/listing.rs

use crate::domain::coerce::{parse_category, parse_number, parse_price, raw_text};
use crate::fetcher::RawListing;

/// A listing flattened into typed fields, next to the verbatim values it
/// was derived from. Every field is coerced on its own, so a bad price
/// never costs us the bedroom count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub address: Option<String>,

    pub price_raw: Option<String>,
    pub price: Option<f64>,

    pub bedrooms_raw: Option<String>,
    pub bedrooms: Option<f64>,
    pub bathrooms_raw: Option<String>,
    pub bathrooms: Option<f64>,
    pub sqft_raw: Option<String>,
    pub sqft: Option<f64>,

    pub property_type: Option<String>,

    /// Everything before the first comma of the address.
    pub neighborhood: Option<String>,
}

impl Listing {
    pub fn from_raw(raw: &RawListing) -> Self {
        let address = raw_text(raw.address.as_ref());
        let neighborhood = extract_neighborhood(address.as_deref());

        Listing {
            price_raw: raw_text(raw.price.as_ref()),
            price: parse_price(raw.price.as_ref()),
            bedrooms_raw: raw_text(raw.bedrooms.as_ref()),
            bedrooms: parse_number(raw.bedrooms.as_ref()),
            bathrooms_raw: raw_text(raw.bathrooms.as_ref()),
            bathrooms: parse_number(raw.bathrooms.as_ref()),
            sqft_raw: raw_text(raw.sqft.as_ref()),
            sqft: parse_number(raw.sqft.as_ref()),
            property_type: parse_category(raw.property_type.as_ref()),
            address,
            neighborhood,
        }
    }
}

/// Grouping key for an address: the text before the first comma, trimmed.
///
/// An address without a comma has no neighborhood. An address that starts
/// with a comma yields `Some("")`, which groups on its own.
pub fn extract_neighborhood(address: Option<&str>) -> Option<String> {
    let (head, _) = address?.split_once(',')?;
    Some(head.trim().to_string())
}
