use anyhow::{Context, Result};
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::{database_path, AppConfig};
use crate::database::{self, SqliteStatisticsSource};
use crate::domain::Season;
use crate::services::QueryService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let db_path = database_path();
        let pool = database::create_pool(&db_path)?;
        let source = Arc::new(SqliteStatisticsSource::new(pool));

        let state = Arc::new(AppState::new(QueryService::new(source, &self.config)));
        if self.config.server.admin_token.is_none() {
            warn!("SPP_ADMIN_TOKEN is not set, admin routes will reject every request");
        }

        warm_up(Arc::clone(&state), self.config.server.warm_seasons.clone()).await?;

        let app = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {} (database {})", addr, db_path);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Recomputes the configured seasons so the first requests find a snapshot
async fn warm_up(state: Arc<AppState>, seasons: Vec<Season>) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        for season in seasons {
            match state.query.recalculate(Some(season)) {
                Ok(summary) => info!(
                    "Warm-up for season {}: {} players ranked, {} skipped",
                    season, summary.recomputed, summary.skipped_invalid
                ),
                Err(e) => warn!("Warm-up for season {} failed: {}", season, e),
            }
        }
    })
    .await
    .context("Warm-up task panicked")
}
