use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::{post_recalculate, put_league_multiplier},
    players::{get_leagues, get_player_breakdown},
    rankings::{
        get_continental_ranking, get_global_ranking, get_league_ranking, get_position_ranking,
        get_stats_overview,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/spp/rankings/global", get(get_global_ranking))
        .route("/api/spp/rankings/league/:league_id", get(get_league_ranking))
        .route("/api/spp/rankings/continent/:continent", get(get_continental_ranking))
        .route("/api/spp/rankings/position/:position", get(get_position_ranking))
        .route("/api/spp/player/:player_id/spp", get(get_player_breakdown))
        .route("/api/spp/recalculate", post(post_recalculate))
        .route("/api/spp/stats/overview", get(get_stats_overview))
        .route("/api/leagues", get(get_leagues))
        .route("/api/admin/leagues/:league_id/multiplier", put(put_league_multiplier))
        .with_state(state)
}
