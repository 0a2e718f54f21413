use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use std::sync::Arc;

use crate::api::models::PlayerBreakdownResponse;
use crate::domain::League;
use crate::errors::SppError;
use crate::ranking::FilterParams;

use super::{parse_path_id, AppState};

pub async fn get_player_breakdown(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
    Query(params): Query<FilterParams>,
) -> Result<Json<PlayerBreakdownResponse>, SppError> {
    let player_id = parse_path_id("playerId", &player_id)?;
    state.query.player_breakdown(player_id, &params).map(Json)
}

pub async fn get_leagues(State(state): State<Arc<AppState>>) -> Result<Json<Vec<League>>, SppError> {
    let leagues = tokio::task::spawn_blocking(move || state.query.leagues())
        .await
        .map_err(|e| SppError::Storage(e.into()))??;
    Ok(Json(leagues))
}
