//! Spreadsheet loading
//!
//! Reads every sheet of the configured file into a [`Workbook`](crate::types::Workbook).
//! Any format calamine auto-detects is accepted (xls, xlsx, xlsm, xlsb, ods).

mod loader;

pub use loader::WorkbookLoader;
