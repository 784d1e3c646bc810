use crate::domain::{Listing, View};
use crate::spreadsheets::ExportError;
use chrono::NaiveDateTime;
use csv::WriterBuilder;

/// Column order of every export, raw fields first then derived ones.
pub const EXPORT_HEADERS: [&str; 11] = [
    "address",
    "price",
    "bedrooms",
    "bathrooms",
    "sqft",
    "property_type",
    "price_numeric",
    "bedrooms_numeric",
    "bathrooms_numeric",
    "sqft_numeric",
    "neighborhood",
];

pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Empty,
}

/// One row of the export, aligned with `EXPORT_HEADERS`.
pub fn export_cells(listing: &Listing) -> [Cell<'_>; 11] {
    fn text(value: &Option<String>) -> Cell<'_> {
        value.as_deref().map_or(Cell::Empty, Cell::Text)
    }
    fn number<'a>(value: Option<f64>) -> Cell<'a> {
        value.map_or(Cell::Empty, Cell::Number)
    }

    [
        text(&listing.address),
        text(&listing.price_raw),
        text(&listing.bedrooms_raw),
        text(&listing.bathrooms_raw),
        text(&listing.sqft_raw),
        text(&listing.property_type),
        number(listing.price),
        number(listing.bedrooms),
        number(listing.bathrooms),
        number(listing.sqft),
        text(&listing.neighborhood),
    ]
}

/// Serialises `view` as CSV: a header row, then one row per listing in
/// view order. Quoting follows the usual CSV rules.
pub fn write_csv_string(view: &View<'_>) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(EXPORT_HEADERS)?;

    for listing in view.iter() {
        let record = export_cells(listing).map(|cell| match cell {
            Cell::Text(s) => s.to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::Empty => String::new(),
        });
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;

    Ok(String::from_utf8(bytes)?)
}

/// `real_estate_listings_YYYYMMDD_HHMMSS`, without extension.
pub fn export_file_stem(at: NaiveDateTime) -> String {
    format!("real_estate_listings_{}", at.format("%Y%m%d_%H%M%S"))
}
