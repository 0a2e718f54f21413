pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod ranking;
pub mod report;
pub mod scoring;
pub mod services;
pub mod snapshot;
pub mod store;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::sync::Arc;

use crate::cli::Command;
use crate::config::{database_path, AppConfig};
use crate::database::SqliteStatisticsSource;
use crate::domain::Season;
use crate::ranking::FilterParams;
use crate::services::server::ServerService;
use crate::services::setup::SetupService;
use crate::services::QueryService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let config = AppConfig::load()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_setup(demo: bool) -> Result<()> {
    let service = SetupService::new(database_path(), demo);
    service.run()
}

pub fn handle_recalculate(season: Option<Season>, top: usize) -> Result<()> {
    let query = open_query_service()?;
    let summary = query.recalculate(season)?;
    report::print_summary(&summary);

    let params = FilterParams {
        season: Some(summary.season.to_string()),
        limit: Some(top.max(1).to_string()),
        ..FilterParams::default()
    };
    let ranking = query.global_ranking(&params)?;
    report::print_ranking(&ranking.ranking);
    Ok(())
}

pub fn handle_overview(season: Option<Season>) -> Result<()> {
    let query = open_query_service()?;
    let summary = query.recalculate(season)?;

    let params = FilterParams {
        season: Some(summary.season.to_string()),
        ..FilterParams::default()
    };
    let overview = query.stats_overview(&params)?;
    report::print_overview(&overview);
    Ok(())
}

fn open_query_service() -> Result<QueryService> {
    let config = AppConfig::load()?;
    let pool = database::create_pool(&database_path())?;
    let source = Arc::new(SqliteStatisticsSource::new(pool));
    Ok(QueryService::new(source, &config))
}
