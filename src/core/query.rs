//! Table queries
//!
//! Pure lookups over an already-loaded [`Workbook`]. Nothing here touches
//! the filesystem.

use crate::error::{SheetError, SheetResult};
use crate::types::{CellValue, Table, Workbook};

/// Table names in the order the loader produced them.
pub fn list_table_names(workbook: &Workbook) -> Vec<String> {
    workbook.tables.iter().map(|t| t.name.clone()).collect()
}

/// First-column labels of every labelled row, in row order.
///
/// Rows whose first cell is missing or empty are skipped. Duplicates are kept.
pub fn list_row_labels(table: &Table) -> Vec<String> {
    table
        .rows
        .iter()
        .filter_map(|row| Table::label_cell(row).as_label())
        .collect()
}

/// Sum the numeric cells of the first row labelled `row_label`.
///
/// The label column is excluded. Cells that do not coerce to a number are
/// skipped, so a row with no numeric payload sums to `0.0`. Matching is exact:
/// case-sensitive and untrimmed.
pub fn row_sum(table: &Table, row_label: &str) -> SheetResult<f64> {
    let row = find_row(table, row_label)
        .ok_or_else(|| SheetError::RowNotFound(row_label.to_string()))?;

    let sum: f64 = row.iter().skip(1).filter_map(CellValue::as_number).sum();

    // JSON has no representation for inf/NaN
    if !sum.is_finite() {
        return Err(SheetError::Computation(format!(
            "sum of row '{}' is not a finite number",
            row_label
        )));
    }

    Ok(sum)
}

fn find_row<'a>(table: &'a Table, row_label: &str) -> Option<&'a [CellValue]> {
    table
        .rows
        .iter()
        .find(|row| Table::label_cell(row).as_label().as_deref() == Some(row_label))
        .map(Vec::as_slice)
}
