use crate::config::Config;
use crate::router::handle;
use crate::state::App;
use astra::{Body, Response};
use http::Method;
use std::io::Read;

/// A fresh app with default settings and an empty session store.
pub fn init_test_app() -> App {
    App::new(Config {
        signature: "Test Buyer".to_string(),
        page_size: 2,
        ..Config::default()
    })
}

pub const SAMPLE_CSV: &str = "\
PropertyAddress,PropertyCity,MLS_Curr_ListPrice,EstimatedMortgageBalance,MLS_Curr_ListAgentName,LOI_Variant,Owner
\"123 Main St, Unit 4, Springfield\",Springfield,250000,0,Jane Doe,v1,Smith
456 Oak Ave,Shelbyville,\"$300,000\",\"$289,750\",Bob Roe,v1,Jones
789 Pine Ct,Capital City,400000,120000,Ann Lee,v1,Brown
";

pub fn get(app: &App, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = http::Request::builder().method(Method::GET).uri(uri);
    if let Some(c) = cookie {
        builder = builder.header("Cookie", c);
    }
    let req = builder.body(Body::empty()).unwrap();
    handle(req, app).expect("Handler failed")
}

/// Uploads `csv` and returns the `name=value` cookie pair the server set.
pub fn upload(app: &App, uri: &str, csv: &str) -> String {
    let req = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "text/csv")
        .body(Body::from(csv.to_string()))
        .unwrap();

    let resp = handle(req, app).expect("Upload failed");
    assert_eq!(resp.status(), 303, "Upload should redirect");

    cookie_pair(&resp)
}

pub fn cookie_pair(resp: &Response) -> String {
    let set_cookie = resp
        .headers()
        .get("Set-Cookie")
        .expect("Set-Cookie header")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .unwrap_or_else(|| panic!("missing header {name}"))
        .to_str()
        .unwrap()
        .to_string()
}
