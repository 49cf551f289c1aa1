pub mod download;
pub mod html;
pub mod json;
pub mod redirect;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::html_response;

pub use download::{csv_download, text_download, xlsx_download};
pub use json::json_response;
pub use redirect::see_other;
