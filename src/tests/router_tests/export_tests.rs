// src/tests/router_tests/export_tests.rs

use crate::spreadsheets::export_csv::EXPORT_HEADERS;
use crate::tests::utils::{get, header, read_body, read_bytes, sample_market, test_app};
use csv::ReaderBuilder;

#[test]
fn csv_export_follows_filters() {
    let (app, _) = test_app(Some(sample_market()));

    let mut resp = get(&app, "/export.csv?price_max=400000&sort=address&show=1");
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "text/csv; charset=utf-8");

    let disposition = header(&resp, "Content-Disposition").to_string();
    assert!(disposition.starts_with("attachment; filename=\"real_estate_listings_"));
    assert!(disposition.ends_with(".csv\""));

    let body = read_body(&mut resp);
    let mut reader = ReaderBuilder::new().from_reader(body.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, EXPORT_HEADERS);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    let cells: Vec<(&str, &str)> = rows.iter().map(|r| (&r[0], &r[1])).collect();

    // Export ignores sort and page size, and keeps the unknown price.
    assert_eq!(
        cells,
        vec![
            ("Maple Heights, Springfield", "$390,000+"),
            ("Riverside, Springfield", "$275,000"),
            ("Riverside, Springfield", "Contact agent"),
        ]
    );
}

#[test]
fn csv_export_quotes_addresses_with_commas() {
    let (app, _) = test_app(Some(sample_market()));

    let mut resp = get(&app, "/export.csv");
    let body = read_body(&mut resp);

    assert!(body.contains("\"Maple Heights, Springfield, IL\",\"$450,000\""));

    let mut reader = ReaderBuilder::new().from_reader(body.as_bytes());
    assert_eq!(reader.records().count(), 6);
}

#[test]
fn xlsx_export_is_a_workbook() {
    let (app, _) = test_app(Some(sample_market()));

    let mut resp = get(&app, "/export.xlsx");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(header(&resp, "Content-Disposition").ends_with(".xlsx\""));
    assert!(read_bytes(&mut resp).starts_with(b"PK"));
}

#[test]
fn export_without_data_is_unavailable() {
    let (app, _) = test_app(None);

    let resp = get(&app, "/export.csv");
    assert_eq!(resp.status(), 503);
}

#[test]
fn export_of_empty_dataset_is_header_only() {
    let (app, _) = test_app(Some(serde_json::json!({})));

    let mut resp = get(&app, "/export.csv");
    assert_eq!(resp.status(), 200);
    assert_eq!(read_body(&mut resp).lines().count(), 1);
}
