// src/tests/router_tests/upload_tests.rs

use crate::config::Config;
use crate::errors::ServerError;
use crate::router::handle;
use crate::state::App;
use crate::tests::utils::{body_string, get, header, init_test_app, upload, SAMPLE_CSV};
use astra::Body;
use http::Method;

#[test]
fn home_page_shows_upload_form() {
    let app = init_test_app();
    let resp = get(&app, "/", None);

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Upload listings"));
    assert!(body.contains("id=\"csv-file\""));
}

#[test]
fn upload_sets_cookie_and_redirects_to_listings() {
    let app = init_test_app();

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/upload?name=march.csv")
        .body(Body::from(SAMPLE_CSV))
        .unwrap();
    let resp = handle(req, &app).expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/listings");
    let cookie = header(&resp, "Set-Cookie");
    assert!(cookie.starts_with("loi_session="));
    assert!(cookie.contains("HttpOnly"));
}

#[test]
fn listings_page_shows_first_page_of_rows() {
    let app = init_test_app();
    let cookie = upload(&app, "/upload?name=march.csv", SAMPLE_CSV);

    let resp = get(&app, "/listings", Some(&cookie));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // page_size is 2 in tests
    assert!(body.contains("Main St"));
    assert!(body.contains("Oak Ave"));
    assert!(!body.contains("Pine Ct"));
    assert!(body.contains("$250,000"));
    assert!(body.contains("$289,000"));
    assert!(body.contains("96.6%"));
    assert!(body.contains("Page 1 of 2"));
    assert!(body.contains("march.csv"));
    assert!(body.contains("/letters/1/download"));
}

#[test]
fn listings_page_is_clamped_to_last_page() {
    let app = init_test_app();
    let cookie = upload(&app, "/upload", SAMPLE_CSV);

    let body = body_string(get(&app, "/listings?page=9", Some(&cookie)));
    assert!(body.contains("Pine Ct"));
    assert!(body.contains("Page 2 of 2"));
    assert!(body.contains("/letters/2/download"));
}

#[test]
fn listings_without_session_redirect_home() {
    let app = init_test_app();

    let resp = get(&app, "/listings", None);
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/");

    let resp = get(&app, "/listings", Some("loi_session=forged"));
    assert_eq!(resp.status(), 303);
}

#[test]
fn second_upload_replaces_the_first() {
    let app = init_test_app();
    let cookie = upload(&app, "/upload", SAMPLE_CSV);

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header("Cookie", &cookie)
        .body(Body::from("PropertyAddress\n10 Fresh Rd\n"))
        .unwrap();
    let resp = handle(req, &app).expect("Handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(crate::tests::utils::cookie_pair(&resp), cookie);

    let body = body_string(get(&app, "/listings", Some(&cookie)));
    assert!(body.contains("Fresh Rd"));
    assert!(!body.contains("Main St"));
    assert_eq!(app.sessions.active_count(chrono::Utc::now().timestamp()).unwrap(), 1);
}

#[test]
fn malformed_upload_is_rejected() {
    let app = init_test_app();

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .body(Body::from(b"PropertyAddress\n\xff\xfe\n".to_vec()))
        .unwrap();
    let err = handle(req, &app).unwrap_err();
    assert!(matches!(err, ServerError::MalformedInput(_)));

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
}

#[test]
fn oversized_upload_is_rejected() {
    let app = App::new(Config {
        max_upload_bytes: 64,
        ..Config::default()
    });

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .body(Body::from(SAMPLE_CSV))
        .unwrap();
    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));

    let small = "PropertyAddress\n1 A St\n";
    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .body(Body::from(small))
        .unwrap();
    assert_eq!(handle(req, &app).expect("Handler failed").status(), 303);
}

#[test]
fn unknown_scheme_is_a_bad_request() {
    let app = init_test_app();

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/upload?scheme=astrology")
        .body(Body::from(SAMPLE_CSV))
        .unwrap();
    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_routes_are_not_found() {
    let app = init_test_app();

    let req = http::Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &app), Err(ServerError::NotFound)));
}
