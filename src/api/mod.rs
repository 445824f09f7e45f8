//! Excel Data API server module
//!
//! Read-only HTTP routes over the configured spreadsheet.
//! Run with the `excel-data-api` binary.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ErrorResponse};
pub use server::{
    build_router, run_api_server, ApiConfig, AppState, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_WORKBOOK_PATH,
};
