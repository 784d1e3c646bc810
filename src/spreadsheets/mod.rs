pub mod export_csv;
mod export_error;
pub mod export_xlsx;

pub use export_csv::{export_file_stem, write_csv_string};
pub use export_error::ExportError;
pub use export_xlsx::export_listings_xlsx;
