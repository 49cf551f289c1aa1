// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from the request handlers or the spreadsheet layers.
/// Letter rendering and metric derivation never produce one of these.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// The uploaded file could not be read as a spreadsheet.
    #[error("Malformed spreadsheet: {0}")]
    MalformedInput(String),
    #[error("No listings have been uploaded in this session")]
    NoSession,
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound | ServerError::NoSession => 404,
            ServerError::BadRequest(_) | ServerError::MalformedInput(_) => 400,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<csv::Error> for ServerError {
    fn from(err: csv::Error) -> Self {
        ServerError::MalformedInput(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ServerError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ServerError::XlsxError(err.to_string())
    }
}
