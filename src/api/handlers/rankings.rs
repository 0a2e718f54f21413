use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use std::sync::Arc;

use crate::api::models::{RankingResponse, StatsOverview};
use crate::errors::SppError;
use crate::ranking::FilterParams;

use super::{parse_path_id, AppState};

pub async fn get_global_ranking(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<RankingResponse>, SppError> {
    state.query.global_ranking(&params).map(Json)
}

pub async fn get_league_ranking(
    State(state): State<Arc<AppState>>,
    Path(league_id): Path<String>,
    Query(params): Query<FilterParams>,
) -> Result<Json<RankingResponse>, SppError> {
    let league_id = parse_path_id("leagueId", &league_id)?;
    state.query.league_ranking(league_id, &params).map(Json)
}

pub async fn get_continental_ranking(
    State(state): State<Arc<AppState>>,
    Path(continent): Path<String>,
    Query(params): Query<FilterParams>,
) -> Result<Json<RankingResponse>, SppError> {
    state.query.continental_ranking(&continent, &params).map(Json)
}

pub async fn get_position_ranking(
    State(state): State<Arc<AppState>>,
    Path(position): Path<String>,
    Query(params): Query<FilterParams>,
) -> Result<Json<RankingResponse>, SppError> {
    state.query.position_ranking(&position, &params).map(Json)
}

pub async fn get_stats_overview(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<StatsOverview>, SppError> {
    state.query.stats_overview(&params).map(Json)
}
