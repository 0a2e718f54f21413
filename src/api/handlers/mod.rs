use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;

use crate::api::models::ErrorBody;
use crate::errors::SppError;
use crate::services::QueryService;

pub mod admin;
pub mod players;
pub mod rankings;

pub struct AppState {
    pub query: QueryService,
}

impl AppState {
    pub fn new(query: QueryService) -> Self {
        Self { query }
    }
}

impl SppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SppError::InvalidFilter(_) => StatusCode::BAD_REQUEST,
            SppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {:#}", self);
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Path identifiers are validated like filter values so malformed ones map to 400
pub(crate) fn parse_path_id(field: &str, raw: &str) -> Result<i64, SppError> {
    raw.trim()
        .parse()
        .map_err(|_| SppError::InvalidFilter(format!("`{field}` must be an integer (got `{raw}`)")))
}

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}
