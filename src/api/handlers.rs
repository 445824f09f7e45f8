//! API request handlers
//!
//! Every data route reloads the workbook from disk; nothing is cached
//! between requests.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::core::{list_row_labels, list_table_names, row_sum as sum_row};
use crate::error::SheetError;
use crate::excel::WorkbookLoader;
use crate::types::Workbook;

use super::error::ApiError;
use super::server::AppState;

/// Routes advertised by `GET /`
pub const ENDPOINTS: [&str; 3] = ["GET /list_tables", "GET /get_table_details", "GET /row_sum"];

/// Root endpoint response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RootResponse {
    pub message: String,
    pub endpoints: Vec<String>,
}

/// GET / - Welcome message and route list
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the Excel Data API".to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// Health check response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub workbook: String,
    pub workbook_present: bool,
}

/// GET /health - Liveness probe; checks the file exists without parsing it
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        workbook: state.workbook_path.display().to_string(),
        workbook_present: state.workbook_path.exists(),
    })
}

/// Version response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> Json<VersionResponse> {
    Json(VersionResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: state.version.clone(),
    })
}

//==============================================================================
// Data routes
//==============================================================================

/// List tables response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TablesResponse {
    pub tables: Vec<String>,
}

/// GET /list_tables - Sheet names in file order
pub async fn list_tables(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TablesResponse>, ApiError> {
    let workbook = load_workbook(&state).await?;
    Ok(Json(TablesResponse {
        tables: list_table_names(&workbook),
    }))
}

/// Table details query
#[derive(Deserialize, Debug)]
pub struct TableDetailsQuery {
    pub table_name: String,
}

/// Table details response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TableDetailsResponse {
    pub table_name: String,
    pub row_names: Vec<String>,
}

/// GET /get_table_details?table_name= - Row labels of one table
pub async fn get_table_details(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TableDetailsQuery>, QueryRejection>,
) -> Result<Json<TableDetailsResponse>, ApiError> {
    let Query(query) = query?;
    let workbook = load_workbook(&state).await?;

    let table = workbook
        .table(&query.table_name)
        .ok_or_else(|| SheetError::TableNotFound(query.table_name.clone()))?;

    Ok(Json(TableDetailsResponse {
        row_names: list_row_labels(table),
        table_name: query.table_name,
    }))
}

/// Row sum query
#[derive(Deserialize, Debug)]
pub struct RowSumQuery {
    pub table_name: String,
    pub row_name: String,
}

/// Row sum response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RowSumResponse {
    pub table_name: String,
    pub row_name: String,
    pub sum: f64,
}

/// GET /row_sum?table_name=&row_name= - Sum of the numeric cells in a row
pub async fn row_sum(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RowSumQuery>, QueryRejection>,
) -> Result<Json<RowSumResponse>, ApiError> {
    let Query(query) = query?;
    let workbook = load_workbook(&state).await?;

    let table = workbook
        .table(&query.table_name)
        .ok_or_else(|| SheetError::TableNotFound(query.table_name.clone()))?;
    let sum = sum_row(table, &query.row_name)?;

    Ok(Json(RowSumResponse {
        table_name: query.table_name,
        row_name: query.row_name,
        sum,
    }))
}

/// Parse the configured file on the blocking pool.
async fn load_workbook(state: &AppState) -> Result<Workbook, ApiError> {
    let loader = WorkbookLoader::new(&state.workbook_path);
    let workbook = tokio::task::spawn_blocking(move || loader.load())
        .await
        .map_err(|e| SheetError::Io(format!("loader task failed: {}", e)))??;
    Ok(workbook)
}
