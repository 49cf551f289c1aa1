use crate::domain::amount::Amount;
use crate::errors::ServerError;
use crate::letters::ProcessedListing;
use crate::spreadsheets::export_headers;
use rust_xlsxwriter::{Format, Workbook};

/// Same table as the CSV export, as a workbook. Cells that parse as plain
/// numbers are written as numbers so spreadsheet formulas work on them.
pub fn export_xlsx(headers: &[String], listings: &[ProcessedListing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    // Headers
    for (col, header) in export_headers(headers).iter().enumerate() {
        let (row, col) = cell_position(0, col)?;
        worksheet
            .write_string_with_format(row, col, header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        for (col, cell) in listing.record.cells.iter().enumerate() {
            let (r, col) = cell_position(i + 1, col)?;
            let written = match plain_number(cell) {
                Some(n) => worksheet.write_number(r, col, n),
                None => worksheet.write_string(r, col, cell),
            };
            written.map_err(|e| ServerError::XlsxError(format!("Failed to write row {r}: {e}")))?;
        }

        let (r, col) = cell_position(i + 1, headers.len())?;
        worksheet
            .write_string(r, col, listing.template_tag())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write template: {e}")))?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn cell_position(row: usize, col: usize) -> Result<(u32, u16), ServerError> {
    let row = u32::try_from(row)
        .map_err(|_| ServerError::XlsxError(format!("row {row} does not fit in a worksheet")))?;
    let col = u16::try_from(col)
        .map_err(|_| ServerError::XlsxError(format!("column {col} does not fit in a worksheet")))?;
    Ok((row, col))
}

/// Longest numeral an f64 cell holds without losing digits.
const MAX_NUMERIC_DIGITS: usize = 15;

/// Only bare numerals count; `$1,000`, `007` or a 17-digit parcel id stay
/// text so nothing is reformatted.
fn plain_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    let looks_numeric = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
        && !(trimmed.len() > 1 && trimmed.starts_with('0') && !trimmed.starts_with("0."));

    let significant = trimmed
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|&c| c == '0')
        .count();

    if looks_numeric && significant <= MAX_NUMERIC_DIGITS {
        Amount::parse(trimmed).value()
    } else {
        None
    }
}
