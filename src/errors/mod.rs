use thiserror::Error;

use crate::domain::{LeagueId, PlayerId};

pub type SppResult<T> = Result<T, SppError>;

/// Errors surfaced by the scoring engine and its query façade
#[derive(Debug, Error)]
pub enum SppError {
    /// Bad input data for one player; never aborts a batch run
    #[error("invalid statistics for player {player_id}: {source}")]
    InvalidStatistics {
        player_id: PlayerId,
        #[source]
        source: InvalidStatistics,
    },

    #[error("{0} not found")]
    NotFound(String),

    /// Malformed filter, rejected before touching ranking data
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Reason a single statistics record cannot be scored
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidStatistics {
    #[error("games played cannot be negative (got {0})")]
    NegativeGames(i32),

    #[error("minutes played cannot be negative (got {0})")]
    NegativeMinutes(i32),

    #[error("{minutes} minutes exceeds the ceiling of {ceiling} for {games} games")]
    MinutesAboveCeiling { minutes: i32, games: i32, ceiling: i64 },

    #[error("{field} cannot be negative (got {value})")]
    NegativeCount { field: &'static str, value: i32 },

    #[error("match rating {0} is outside 0-10")]
    RatingOutOfRange(f64),

    #[error("league multiplier must be finite and positive (got {0})")]
    InvalidMultiplier(f64),

    #[error("league {0} is not in the reference set")]
    UnknownLeague(LeagueId),
}

impl InvalidStatistics {
    pub fn for_player(self, player_id: PlayerId) -> SppError {
        SppError::InvalidStatistics {
            player_id,
            source: self,
        }
    }
}
