//! Excel Data API - read-only HTTP access to a spreadsheet
//!
//! Loads every sheet of one configured spreadsheet file and serves three
//! queries over it: list the sheets, list a sheet's row labels, and sum
//! the numeric cells of a labelled row. The file is re-read on every
//! request, so responses always reflect what is on disk.
//!
//! # Example
//!
//! ```no_run
//! use excel_data_api::core::{list_row_labels, row_sum};
//! use excel_data_api::excel::WorkbookLoader;
//!
//! let workbook = WorkbookLoader::new("./Data/capbudg.xls").load()?;
//! if let Some(table) = workbook.table("CapBudg") {
//!     println!("Rows: {:?}", list_row_labels(table));
//!     println!("Total: {}", row_sum(table, "Initial Investment")?);
//! }
//! # Ok::<(), excel_data_api::error::SheetError>(())
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{SheetError, SheetResult};
pub use types::{CellValue, Table, Workbook};
