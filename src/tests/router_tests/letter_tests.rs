// src/tests/router_tests/letter_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, init_test_app, upload, SAMPLE_CSV};
use astra::Body;
use http::Method;

#[test]
fn download_is_a_named_text_attachment() {
    let app = init_test_app();
    let cookie = upload(&app, "/upload", SAMPLE_CSV);

    let resp = get(&app, "/letters/0/download", Some(&cookie));
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/plain"));
    assert_eq!(
        header(&resp, "Content-Disposition"),
        "attachment; filename=\"LOI_Main_St.txt\""
    );

    let letter = body_string(resp);
    assert!(letter.starts_with("Hey Jane,"));
    assert!(letter.contains("I think $250,000 sounds pretty reasonable"));
    assert!(letter.ends_with("Thanks,\nTest Buyer"));
}

#[test]
fn each_category_gets_its_letter() {
    let app = init_test_app();
    let cookie = upload(&app, "/upload", SAMPLE_CSV);

    let low_equity = body_string(get(&app, "/letters/1/download", Some(&cookie)));
    assert!(low_equity.contains("remaining mortgage balance of about $289,000"));

    let standard = body_string(get(&app, "/letters/2/download", Some(&cookie)));
    assert!(standard.contains("I could probably pay $400,000 for it."));
    assert!(standard.contains("other sellers in Capital City"));
}

#[test]
fn repeated_downloads_are_identical() {
    let app = init_test_app();
    // No variant column: variants are drawn at random once, on upload.
    let csv = "PropertyAddress,MLS_Curr_ListPrice,EstimatedMortgageBalance\n1 A St,100000,50000\n2 B St,100000,0\n";
    let cookie = upload(&app, "/upload", csv);

    for index in 0..2 {
        let uri = format!("/letters/{index}/download");
        let first = body_string(get(&app, &uri, Some(&cookie)));
        for _ in 0..3 {
            assert_eq!(body_string(get(&app, &uri, Some(&cookie))), first);
        }
    }
}

#[test]
fn preview_page_shows_letter_and_links_back() {
    let app = init_test_app();
    let cookie = upload(&app, "/upload", SAMPLE_CSV);

    let resp = get(&app, "/letters/2", Some(&cookie));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Pine Ct"));
    assert!(body.contains("Hey Ann,"));
    assert!(body.contains("/listings?page=2"));
}

#[test]
fn out_of_range_and_sessionless_requests_fail() {
    let app = init_test_app();
    let cookie = upload(&app, "/upload", SAMPLE_CSV);

    let req = http::Request::builder()
        .method(Method::GET)
        .uri("/letters/3/download")
        .header("Cookie", &cookie)
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &app), Err(ServerError::NotFound)));

    let req = http::Request::builder()
        .method(Method::GET)
        .uri("/letters/0/download")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &app), Err(ServerError::NoSession)));
}

#[test]
fn strategy_sheet_renders_placeholder_for_unreadable_ltv() {
    let app = init_test_app();
    let csv = "PropertyAddress,MLS_Curr_ListPrice,LTV,TotalLoans,LOI_Variant\n\
               5 Elm St,200000,20%,40000,v1\n\
               6 Ash St,200000,n/a,,v1\n";
    let cookie = upload(&app, "/upload", csv);

    let seller = body_string(get(&app, "/letters/0/download", Some(&cookie)));
    assert!(seller.contains("financing part of the sale"));

    let unknown = body_string(get(&app, "/letters/1/download", Some(&cookie)));
    assert!(unknown.starts_with("[NO LETTER GENERATED]"));
    assert!(unknown.contains("Ash St"));
}
