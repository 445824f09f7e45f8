use std::path::PathBuf;

use axum::http::StatusCode;
use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Excel file not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error reading Excel file: {0}")]
    Io(String),

    #[error("Table '{0}' not found in Excel file")]
    TableNotFound(String),

    #[error("Row '{0}' not found in table")]
    RowNotFound(String),

    #[error("Error calculating row sum: {0}")]
    Computation(String),
}

impl SheetError {
    /// HTTP status this error surfaces as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SheetError::NotFound(_) | SheetError::TableNotFound(_) | SheetError::RowNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            SheetError::Io(_) | SheetError::Computation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
