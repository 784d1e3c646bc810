pub mod csv;
pub mod errors;
pub mod html;
pub mod xlsx;

pub use csv::csv_response;
pub use errors::{error_response, ResultResp};
pub use html::{html_response, html_response_with_status, see_other};
pub use xlsx::xlsx_response;
