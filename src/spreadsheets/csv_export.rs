use crate::errors::ServerError;
use crate::letters::ProcessedListing;

pub const TEMPLATE_COLUMN: &str = "LOI_Template";

/// Name of the column added on export. Never collides with an uploaded header,
/// so the export always has exactly one more column than the upload.
pub fn template_column_name(headers: &[String]) -> String {
    let taken = |name: &str| headers.iter().any(|h| h.eq_ignore_ascii_case(name));

    if !taken(TEMPLATE_COLUMN) {
        return TEMPLATE_COLUMN.to_string();
    }

    (2..)
        .map(|n| format!("{TEMPLATE_COLUMN}_{n}"))
        .find(|name| !taken(name))
        .unwrap_or_else(|| TEMPLATE_COLUMN.to_string())
}

/// Header row of an export: the uploaded headers plus the template column.
pub fn export_headers(headers: &[String]) -> Vec<String> {
    let mut out = headers.to_vec();
    out.push(template_column_name(headers));
    out
}

/// Re-serializes the uploaded sheet, in upload order, with the chosen
/// template appended to every row.
pub fn export_csv(headers: &[String], listings: &[ProcessedListing]) -> Result<Vec<u8>, ServerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(export_headers(headers))?;

    for listing in listings {
        let tag = listing.template_tag();
        writer.write_record(
            listing
                .record
                .cells
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(tag.as_str())),
        )?;
    }

    writer.into_inner().map_err(|e| {
        tracing::error!("failed to finish CSV export: {e}");
        ServerError::InternalError
    })
}
