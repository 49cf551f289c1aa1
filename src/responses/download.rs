// responses/download.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Bytes offered to the browser as a file to save.
pub fn attachment(buffer: Vec<u8>, content_type: &str, filename: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError) // Convert any builder error
}

/// A rendered letter as a plain-text download.
pub fn text_download(text: String, filename: &str) -> ResultResp {
    attachment(text.into_bytes(), mime::TEXT_PLAIN_UTF_8.as_ref(), filename)
}

pub fn csv_download(buffer: Vec<u8>, filename: &str) -> ResultResp {
    attachment(buffer, mime::TEXT_CSV_UTF_8.as_ref(), filename)
}

pub fn xlsx_download(buffer: Vec<u8>, filename: &str) -> ResultResp {
    attachment(buffer, XLSX_CONTENT_TYPE, filename)
}
