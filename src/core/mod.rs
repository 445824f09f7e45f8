//! Row and table queries over a loaded workbook

pub mod query;

pub use query::{list_row_labels, list_table_names, row_sum};
