//! Error → HTTP response mapping

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::error::SheetError;

/// Error body: `{"detail": "..."}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Sheet(e) => e.status_code(),
            ApiError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();
        warn!(status = status.as_u16(), %detail, "request failed");
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
