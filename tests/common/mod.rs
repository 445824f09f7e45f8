//! Shared fixtures: author real .xlsx files with rust_xlsxwriter

#![allow(dead_code)]

use excel_data_api::CellValue;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

pub type Sheet<'a> = (&'a str, Vec<Vec<CellValue>>);

/// Write `sheets` to `path` in order. `Missing` cells are left unwritten.
pub fn write_workbook(path: &Path, sheets: &[Sheet]) {
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    CellValue::Number(n) => {
                        worksheet.write_number(r, c, *n).unwrap();
                    }
                    CellValue::Text(s) => {
                        worksheet.write_string(r, c, s.as_str()).unwrap();
                    }
                    CellValue::Missing => {}
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

pub fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

pub fn blank() -> CellValue {
    CellValue::Missing
}

/// A small capital-budgeting workbook: CapBudg, Assumptions, Initial Investment
pub fn capbudg_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("capbudg.xlsx");
    write_workbook(
        &path,
        &[
            (
                "CapBudg",
                vec![
                    vec![text("Year 0"), num(1.0)],
                    vec![blank(), num(2.0)],
                    vec![text("Year 1"), num(3.0)],
                    vec![text("Cash Flow"), num(-500.0), num(150.5), text("n/a"), num(200.0)],
                    vec![text("Notes"), text("pending"), text("review")],
                    vec![text("Text Numbers"), text("10"), text("2.5"), text("12abc")],
                ],
            ),
            (
                "Assumptions",
                vec![
                    vec![text("Tax Rate"), num(0.25)],
                    vec![text("Tax Rate"), num(0.3)],
                ],
            ),
            (
                "Initial Investment",
                vec![vec![text("Initial Investment"), num(100.0), num(200.0), blank()]],
            ),
        ],
    );
    path
}
