use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    League, LeagueId, Player, PlayerId, PositionCategory, ScoreBreakdown, Season, SeasonStatistics,
    Team,
};
use crate::ranking::{RankingEntry, RankingFilter};
use crate::snapshot::ScoredPlayer;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub ranking: Vec<RankingItem>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub season: Season,
    pub filters: RankingFilter,
    pub computed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingItem {
    pub rank: usize,
    pub player: RankedPlayer,
    pub position: PositionCategory,
    pub final_score: f64,
    pub statistics: StatisticsSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub league: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub games: i32,
    pub goals: i32,
    pub assists: i32,
    pub rating: Option<f64>,
}

impl RankingItem {
    pub fn new(rank: usize, scored: &ScoredPlayer) -> Self {
        Self {
            rank,
            player: RankedPlayer {
                id: scored.player.id,
                name: scored.player.name.clone(),
                team: scored.team.name.clone(),
                league: scored.league.name.clone(),
                country: scored.player.nationality.clone(),
            },
            position: scored.position,
            final_score: scored.final_score(),
            statistics: StatisticsSummary {
                games: scored.statistics.games,
                goals: scored.statistics.goals,
                assists: scored.statistics.assists,
                rating: scored.statistics.rating,
            },
        }
    }
}

impl From<RankingEntry<'_>> for RankingItem {
    fn from(entry: RankingEntry<'_>) -> Self {
        Self::new(entry.rank, entry.player)
    }
}

/// Weights the breakdown was computed with
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedWeights {
    pub goal: f64,
    pub assist: f64,
    pub yellow_card: f64,
    pub red_card: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBreakdownResponse {
    pub player: Player,
    pub team: Team,
    pub league: League,
    pub season: Season,
    pub position: PositionCategory,
    pub final_score: f64,
    /// Position in the unfiltered season ranking
    #[serde(rename = "rank")]
    pub global_rank: usize,
    pub breakdown: ScoreBreakdown,
    pub weights: AppliedWeights,
    pub statistics: SeasonStatistics,
    pub computed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueOverview {
    pub league_id: LeagueId,
    pub name: String,
    pub continent: String,
    pub player_count: usize,
    pub avg_score: f64,
    pub max_score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionOverview {
    pub position: PositionCategory,
    pub count: usize,
    pub avg_score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub season: Season,
    pub total_players: usize,
    pub total_leagues: usize,
    pub avg_score: f64,
    pub top_score: f64,
    pub leagues: Vec<LeagueOverview>,
    pub positions: Vec<PositionOverview>,
    pub top_players: Vec<RankingItem>,
    pub computed_at: Option<DateTime<Utc>>,
}

impl StatsOverview {
    pub fn empty(season: Season) -> Self {
        Self {
            season,
            total_players: 0,
            total_leagues: 0,
            avg_score: 0.0,
            top_score: 0.0,
            leagues: Vec::new(),
            positions: Vec::new(),
            top_players: Vec::new(),
            computed_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
