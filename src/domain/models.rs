use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::position::PositionCategory;

pub type PlayerId = i64;
pub type TeamId = i64;
pub type LeagueId = i64;
pub type Season = i32;

/// Extra-time ceiling used to validate minutes played
pub const MAX_MINUTES_PER_GAME: i64 = 120;

/// Player biographical data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub nationality: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub height_cm: Option<u16>,
    pub weight_kg: Option<u16>,
}

impl Player {
    pub fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            nationality: None,
            birth_date: None,
            height_cm: None,
            weight_kg: None,
        }
    }
}

/// Club a player is affiliated with for a season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub country: Option<String>,
}

impl Team {
    pub fn new(id: TeamId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            country: None,
        }
    }
}

/// Competition with its difficulty multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub multiplier: f64,
}

/// Raw statistics of one player in one season
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStatistics {
    pub games: i32,
    pub goals: i32,
    pub assists: i32,
    pub minutes: i32,
    pub rating: Option<f64>,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub penalties_scored: i32,
    pub penalties_missed: i32,
}

/// One (player, season) row as delivered by the statistics source
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonRecord {
    pub player: Player,
    pub team: Team,
    pub league_id: LeagueId,
    pub season: Season,
    pub position: PositionCategory,
    pub statistics: SeasonStatistics,
}

/// Derived score of one player, produced by a recompute run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub goal_points: f64,
    pub assist_points: f64,
    pub penalty_points: f64,
    pub raw_subtotal: f64,
    pub league_multiplier: f64,
    pub final_score: f64,
}
