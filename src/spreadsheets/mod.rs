pub mod csv_export;
pub mod csv_import;
pub mod xlsx_export;

pub use csv_export::{export_csv, export_headers};
pub use csv_import::parse_listings;
pub use xlsx_export::export_xlsx;
