// src/tests/router_tests/export_tests.rs

use crate::tests::utils::{body_string, get, header, init_test_app, upload, SAMPLE_CSV};
use std::io::Read;

#[test]
fn csv_export_adds_one_column_and_keeps_order() {
    let app = init_test_app();
    let cookie = upload(&app, "/upload?name=march.csv", SAMPLE_CSV);

    let resp = get(&app, "/export.csv", Some(&cookie));
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/csv"));
    assert_eq!(
        header(&resp, "Content-Disposition"),
        "attachment; filename=\"march_loi.csv\""
    );

    let body = body_string(resp);
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

    assert_eq!(headers.len(), 8);
    assert_eq!(headers.last().map(String::as_str), Some("LOI_Template"));
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "123 Main St, Unit 4, Springfield");
    assert_eq!(&rows[0][7], "no_mortgage:v1");
    assert_eq!(&rows[1][3], "$289,750");
    assert_eq!(&rows[1][7], "low_equity:v1");
    assert_eq!(&rows[2][6], "Brown");
    assert_eq!(&rows[2][7], "standard:v1");
}

#[test]
fn xlsx_export_is_a_workbook() {
    let app = init_test_app();
    let cookie = upload(&app, "/upload", SAMPLE_CSV);

    let resp = get(&app, "/export.xlsx", Some(&cookie));
    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Disposition"),
        "attachment; filename=\"listings_loi.xlsx\""
    );

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn json_api_pages_listing_summaries() {
    let app = init_test_app();
    let cookie = upload(&app, "/upload", SAMPLE_CSV);

    let resp = get(&app, "/api/listings?page=2", Some(&cookie));
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["page"], 2);
    assert_eq!(json["page_count"], 2);
    assert_eq!(json["total"], 3);
    assert_eq!(json["scheme"], "equity");

    let item = &json["listings"][0];
    assert_eq!(item["index"], 2);
    assert_eq!(item["short_address"], "Pine Ct");
    assert_eq!(item["category"], "standard");
    assert_eq!(item["variant"], "v1");
    assert_eq!(item["mortgage_balance"], 120000);
}
