use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use log::info;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::Season;
use crate::errors::SppError;
use crate::services::RecalculationSummary;

use super::{error_response, parse_path_id, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecalculateRequest {
    pub season: Option<Season>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultiplierRequest {
    pub multiplier: f64,
}

/// Empty body recomputes the default season
pub async fn post_recalculate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RecalculationSummary>, SppError> {
    let request = parse_body::<RecalculateRequest>(&body)?.unwrap_or_default();

    info!("Recalculation requested for season {:?}", request.season);
    let summary = tokio::task::spawn_blocking(move || state.query.recalculate(request.season))
        .await
        .map_err(|e| SppError::Storage(e.into()))??;
    Ok(Json(summary))
}

pub async fn put_league_multiplier(
    State(state): State<Arc<AppState>>,
    Path(league_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !is_authorized(&headers, state.query.settings().admin_token.as_deref()) {
        return error_response(StatusCode::UNAUTHORIZED, "missing or invalid admin token");
    }

    let result = async {
        let league_id = parse_path_id("leagueId", &league_id)?;
        let request = parse_body::<MultiplierRequest>(&body)?
            .ok_or_else(|| SppError::InvalidFilter("request body is required".to_string()))?;
        if !request.multiplier.is_finite() || request.multiplier <= 0.0 {
            return Err(SppError::InvalidFilter(format!(
                "multiplier must be finite and positive (got {})",
                request.multiplier
            )));
        }

        tokio::task::spawn_blocking(move || {
            state.query.update_league_multiplier(league_id, request.multiplier)
        })
        .await
        .map_err(|e| SppError::Storage(e.into()))?
    }
    .await;

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

fn is_authorized(headers: &HeaderMap, expected: Option<&str>) -> bool {
    let Some(expected) = expected else {
        return false;
    };
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == expected)
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<Option<T>, SppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| SppError::InvalidFilter(format!("malformed request body: {e}")))
}
