use crate::domain::listing::ListingSheet;
use crate::errors::ServerError;
use tracing::{info, warn};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses an uploaded CSV into a sheet. The first row is the header row.
///
/// Rows shorter than the header are padded with empty cells (those fields are
/// missing); longer rows are cut back to the header width. Anything the CSV
/// reader rejects is reported as `ServerError::MalformedInput`.
pub fn parse_listings(bytes: &[u8]) -> Result<ListingSheet, ServerError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    // Kept verbatim for the export; column matching ignores the padding.
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ServerError::MalformedInput(
            "the file has no header row".into(),
        ));
    }

    let width = headers.len();
    let mut rows = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let record = result?;

        // A line with nothing on it. `,,` is a row of empty cells and is kept.
        if record.len() <= 1 && record.iter().all(str::is_empty) {
            continue;
        }

        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        if cells.len() > width {
            // Row numbers are 1-based and count the header row.
            warn!(
                row = i + 2,
                cells = cells.len(),
                width,
                "row has more cells than headers; extra cells dropped"
            );
            cells.truncate(width);
        }
        cells.resize(width, String::new());
        rows.push(cells);
    }

    info!(rows = rows.len(), columns = width, "parsed listings upload");

    Ok(ListingSheet::new(headers, rows))
}
