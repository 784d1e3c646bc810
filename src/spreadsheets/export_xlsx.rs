use crate::domain::View;
use crate::spreadsheets::export_csv::{export_cells, Cell, EXPORT_HEADERS};
use crate::spreadsheets::ExportError;
use rust_xlsxwriter::Workbook;

/// Same columns as the CSV export, with numeric columns written as numbers.
pub fn export_listings_xlsx(view: &View<'_>) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, listing) in view.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, cell) in export_cells(listing).into_iter().enumerate() {
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(r, col as u16, s)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(r, col as u16, n)?;
                }
                Cell::Empty => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
