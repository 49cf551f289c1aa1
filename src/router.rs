use crate::domain::pagination::Page;
use crate::errors::ServerError;
use crate::letters::{process_all, Category, ProcessedListing, Scheme, Variant};
use crate::responses::{
    csv_download, html_response, json_response, see_other, text_download, xlsx_download,
    ResultResp,
};
use crate::session::{session_cookie, token_from_cookie_header, Session};
use crate::spreadsheets::{export_csv, export_xlsx, parse_listings};
use crate::state::App;
use crate::templates::pages::{home_page, letter_page, listings_page, ListingsVm};
use astra::Request;
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info, warn};

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(&req);
    let token = session_token(&req);
    let now = Utc::now().timestamp();

    debug!(%method, %path, "request");

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let token = token.as_deref();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => home(app, token, now),
        ("POST", ["upload"]) => upload(&mut req, app, &query, token, now),
        ("GET", ["listings"]) => listings(app, token, &query, now),
        ("GET", ["letters", index]) => letter_preview(app, token, parse_index(index)?, now),
        ("GET", ["letters", index, "download"]) => {
            letter_download(app, token, parse_index(index)?, now)
        }
        ("GET", ["export.csv"]) => export(app, token, ExportFormat::Csv, now),
        ("GET", ["export.xlsx"]) => export(app, token, ExportFormat::Xlsx, now),
        ("GET", ["api", "listings"]) => api_listings(app, token, &query, now),
        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &App, token: Option<&str>, now: i64) -> ResultResp {
    let has_session = match token {
        Some(t) => app.sessions.with_session(t, now, |_| ())?.is_some(),
        None => false,
    };
    html_response(home_page(has_session))
}

fn upload(
    req: &mut Request,
    app: &App,
    query: &HashMap<String, String>,
    token: Option<&str>,
    now: i64,
) -> ResultResp {
    let limit = app.config.max_upload_bytes;
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("could not read upload: {e}")))?;

    if bytes.len() as u64 > limit {
        warn!(limit, "rejected oversized upload");
        return Err(ServerError::BadRequest(format!(
            "the uploaded file is larger than {limit} bytes"
        )));
    }

    if bytes.is_empty() {
        return Err(ServerError::BadRequest("the uploaded file is empty".into()));
    }

    let sheet = parse_listings(&bytes).inspect_err(|e| warn!(error = %e, "rejected upload"))?;

    let scheme = match query.get("scheme").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(raw) => Scheme::parse(raw)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown letter rules '{raw}'")))?,
        None => Scheme::detect(&sheet.columns),
    };

    let listings = process_all(sheet.records, scheme, &mut rand::thread_rng());
    let file_name = query.get("name").cloned().filter(|n| !n.trim().is_empty());

    info!(
        rows = listings.len(),
        scheme = scheme.as_str(),
        file = file_name.as_deref().unwrap_or("-"),
        "processed upload"
    );

    let session = Session {
        file_name,
        headers: sheet.headers,
        scheme,
        listings,
    };

    let fresh = app.sessions.upsert(token, session, now)?;
    let cookie_token = match (&fresh, token) {
        (Some(t), _) => t.as_str(),
        (None, Some(t)) => t,
        (None, None) => return Err(ServerError::InternalError),
    };
    debug!(active = app.sessions.active_count(now)?, "sessions");

    let cookie = session_cookie(cookie_token, app.sessions.ttl_secs());
    see_other("/listings", Some(&cookie))
}

fn listings(
    app: &App,
    token: Option<&str>,
    query: &HashMap<String, String>,
    now: i64,
) -> ResultResp {
    let requested = page_param(query);
    let page_size = app.config.page_size;

    match with_session(app, token, now, |session| {
        let page = Page::new(requested, session.listings.len(), page_size);
        let vm = ListingsVm {
            file_name: session.file_name.as_deref(),
            scheme_label: scheme_label(session.scheme),
            page,
            rows: &session.listings[page.range()],
        };
        Ok(listings_page(&vm))
    }) {
        Ok(markup) => html_response(markup),
        Err(ServerError::NoSession) => see_other("/", None),
        Err(e) => Err(e),
    }
}

fn letter_preview(app: &App, token: Option<&str>, index: usize, now: i64) -> ResultResp {
    let signature = app.config.signature.as_str();
    let page_size = app.config.page_size;

    let markup = with_session(app, token, now, |session| {
        let listing = listing_at(session, index)?;
        let letter = listing.letter(signature);
        Ok(letter_page(index, listing, &letter, index / page_size + 1))
    })?;

    html_response(markup)
}

fn letter_download(app: &App, token: Option<&str>, index: usize, now: i64) -> ResultResp {
    let signature = app.config.signature.as_str();

    let (text, filename) = with_session(app, token, now, |session| {
        let listing = listing_at(session, index)?;
        Ok((listing.letter(signature), listing.letter_filename(index)))
    })?;

    info!(index, %filename, "letter downloaded");
    text_download(text, &filename)
}

#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Csv,
    Xlsx,
}

fn export(app: &App, token: Option<&str>, format: ExportFormat, now: i64) -> ResultResp {
    let (buffer, filename) = with_session(app, token, now, |session| {
        let buffer = match format {
            ExportFormat::Csv => export_csv(&session.headers, &session.listings)?,
            ExportFormat::Xlsx => export_xlsx(&session.headers, &session.listings)?,
        };
        let ext = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        };
        Ok((buffer, export_filename(session.file_name.as_deref(), ext)))
    })?;

    info!(%filename, bytes = buffer.len(), "exported listings");

    match format {
        ExportFormat::Csv => csv_download(buffer, &filename),
        ExportFormat::Xlsx => xlsx_download(buffer, &filename),
    }
}

#[derive(Debug, Serialize)]
struct ListingSummary {
    index: usize,
    short_address: String,
    agent_first_name: String,
    list_price: Option<f64>,
    mortgage_balance: i64,
    ltv: f64,
    category: Category,
    variant: Variant,
    template: String,
}

#[derive(Debug, Serialize)]
struct ListingsPageJson {
    page: usize,
    page_count: usize,
    total: usize,
    scheme: Scheme,
    listings: Vec<ListingSummary>,
}

fn api_listings(
    app: &App,
    token: Option<&str>,
    query: &HashMap<String, String>,
    now: i64,
) -> ResultResp {
    let requested = page_param(query);
    let page_size = app.config.page_size;

    let body = with_session(app, token, now, |session| {
        let page = Page::new(requested, session.listings.len(), page_size);
        let range = page.range();
        let listings = session.listings[range.clone()]
            .iter()
            .zip(range)
            .map(|(listing, index)| ListingSummary {
                index,
                short_address: listing.metrics.short_address.clone(),
                agent_first_name: listing.metrics.agent_first_name.clone(),
                list_price: listing.record.list_price.value(),
                mortgage_balance: listing.quoted_balance(),
                ltv: listing.display_ltv(),
                category: listing.category,
                variant: listing.variant,
                template: listing.template_tag(),
            })
            .collect();

        Ok(ListingsPageJson {
            page: page.number,
            page_count: page.page_count(),
            total: page.total_items,
            scheme: session.scheme,
            listings,
        })
    })?;

    json_response(&body)
}

/// Runs `f` against the caller's session; `NoSession` when there isn't one.
fn with_session<T, F>(app: &App, token: Option<&str>, now: i64, f: F) -> Result<T, ServerError>
where
    F: FnOnce(&Session) -> Result<T, ServerError>,
{
    let token = token.ok_or(ServerError::NoSession)?;
    app.sessions
        .with_session(token, now, f)?
        .ok_or(ServerError::NoSession)?
}

fn listing_at(session: &Session, index: usize) -> Result<&ProcessedListing, ServerError> {
    session.listings.get(index).ok_or(ServerError::NotFound)
}

fn scheme_label(scheme: Scheme) -> &'static str {
    match scheme {
        Scheme::Equity => "mortgage balance",
        Scheme::Strategy => "LTV column",
    }
}

/// `listings.csv` -> `listings_loi.csv`; unnamed uploads become `listings_loi.<ext>`.
fn export_filename(file_name: Option<&str>, ext: &str) -> String {
    let stem = file_name
        .map(|n| n.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(n))
        .map(crate::letters::sanitize_filename)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "listings".to_string());

    format!("{stem}_loi.{ext}")
}

fn parse_index(raw: &str) -> Result<usize, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("'{raw}' is not a listing number")))
}

fn page_param(query: &HashMap<String, String>) -> usize {
    query
        .get("page")
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(1)
}

fn session_token(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(token_from_cookie_header)
        .map(str::to_string)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
