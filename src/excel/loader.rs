//! Workbook loader - spreadsheet file → in-memory tables

use crate::error::{SheetError, SheetResult};
use crate::types::{CellValue, Table, Workbook};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads a spreadsheet file into a [`Workbook`].
///
/// Nothing is cached: every call to [`load`](Self::load) reopens and
/// re-parses the file.
pub struct WorkbookLoader {
    path: PathBuf,
}

impl WorkbookLoader {
    /// Create a new loader for the given file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read every sheet of the file, in file order
    pub fn load(&self) -> SheetResult<Workbook> {
        // try_exists: an unreadable path is an I/O failure, not a missing file
        match self.path.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(SheetError::NotFound(self.path.clone())),
            Err(e) => return Err(SheetError::Io(e.to_string())),
        }

        let mut sheets =
            open_workbook_auto(&self.path).map_err(|e| SheetError::Io(e.to_string()))?;

        let mut workbook = Workbook::new();
        for sheet_name in sheets.sheet_names() {
            let range = sheets
                .worksheet_range(&sheet_name)
                .map_err(|e| SheetError::Io(format!("sheet '{}': {}", sheet_name, e)))?;
            workbook.add_table(Self::range_to_table(&sheet_name, &range));
        }

        debug!(
            path = %self.path.display(),
            sheets = workbook.len(),
            "loaded workbook"
        );
        Ok(workbook)
    }

    /// Convert a used range into a table anchored at column A.
    ///
    /// calamine trims leading empty columns from the range; those are
    /// padded back so the first cell of every row is always column A.
    fn range_to_table(sheet_name: &str, range: &Range<Data>) -> Table {
        let mut table = Table::new(sheet_name);
        let lead = range.start().map_or(0, |(_, col)| col as usize);

        for row in range.rows() {
            let mut cells = Vec::with_capacity(lead + row.len());
            cells.resize(lead, CellValue::Missing);
            cells.extend(row.iter().map(Self::convert_cell));
            table.add_row(cells);
        }

        table
    }

    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
            // Excel serial date
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) | Data::Empty => CellValue::Missing,
        }
    }
}
