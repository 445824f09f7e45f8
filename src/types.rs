//==============================================================================
// Cell Values
//==============================================================================

/// A single spreadsheet cell, typed permissively
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Numeric cell (integers are widened to f64)
    Number(f64),
    /// Text cell, kept verbatim
    Text(String),
    /// Blank, error, or absent cell
    Missing,
}

impl CellValue {
    /// Value used as a row label, if the cell can label a row.
    ///
    /// Missing cells and empty text have no label. Numbers render with
    /// their shortest display form, so `2024.0` labels as `"2024"`.
    pub fn as_label(&self) -> Option<String> {
        match self {
            CellValue::Text(s) if s.is_empty() => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Missing => None,
        }
    }

    /// Numeric coercion used when summing.
    ///
    /// Text is accepted only when the whole (trimmed) string parses as a
    /// finite number; `"12abc"` is not a partial match.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Number(_) => None,
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

//==============================================================================
// Tables and Workbooks
//==============================================================================

/// One sheet: row-major cells, first column is the row label
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// First column of a row, `Missing` for rows with no cells.
    pub fn label_cell(row: &[CellValue]) -> &CellValue {
        row.first().unwrap_or(&CellValue::Missing)
    }
}

/// All sheets from one load of the source file, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub tables: Vec<Table>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Look up a table by exact name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
