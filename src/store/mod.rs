use anyhow::Result;

use crate::domain::{League, LeagueId, Season, SeasonRecord};

pub mod memory;

pub use memory::MemoryStatisticsSource;

/// Read accessor over the ingestion/storage collaborator.
///
/// Statistics are read-only to the engine; the only write is the
/// administrative league multiplier update.
pub trait StatisticsSource: Send + Sync {
    /// League reference set with current multipliers
    fn leagues(&self) -> Result<Vec<League>>;

    /// Every (player, season) record of the given season
    fn season_records(&self, season: Season) -> Result<Vec<SeasonRecord>>;

    /// Returns `false` when the league does not exist
    fn update_league_multiplier(&self, league_id: LeagueId, multiplier: f64) -> Result<bool>;
}
