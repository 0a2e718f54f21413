use anyhow::Result;

use crate::domain::{League, LeagueId, Season, SeasonRecord};
use crate::store::StatisticsSource;

use super::connection::{get_connection, DbPool};
use super::{leagues, statistics};

/// Statistics source backed by the SQLite database
pub struct SqliteStatisticsSource {
    pool: DbPool,
}

impl SqliteStatisticsSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl StatisticsSource for SqliteStatisticsSource {
    fn leagues(&self) -> Result<Vec<League>> {
        let conn = get_connection(&self.pool)?;
        leagues::list_all(&conn)
    }

    fn season_records(&self, season: Season) -> Result<Vec<SeasonRecord>> {
        let conn = get_connection(&self.pool)?;
        statistics::list_season_records(&conn, season)
    }

    fn update_league_multiplier(&self, league_id: LeagueId, multiplier: f64) -> Result<bool> {
        let conn = get_connection(&self.pool)?;
        leagues::update_multiplier(&conn, league_id, multiplier)
    }
}
