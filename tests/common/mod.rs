#![allow(dead_code)]

use std::sync::Arc;

use spp_ranking::config::leagues::get_reference_leagues;
use spp_ranking::config::AppConfig;
use spp_ranking::domain::{
    League, LeagueId, Player, PlayerId, PositionCategory, Season, SeasonRecord, SeasonStatistics,
    Team, TeamId,
};
use spp_ranking::services::QueryService;
use spp_ranking::store::MemoryStatisticsSource;

pub const SEASON: Season = 2023;
pub const INVALID_PLAYER: PlayerId = 10;

/// Expected global order of the valid fixture players
pub const GLOBAL_ORDER: [PlayerId; 9] = [8, 3, 4, 2, 1, 9, 7, 5, 6];

pub struct Line {
    pub id: PlayerId,
    pub name: &'static str,
    pub team: (TeamId, &'static str),
    pub league: LeagueId,
    pub position: PositionCategory,
    pub games: i32,
    pub minutes: i32,
    pub goals: i32,
    pub assists: i32,
    pub yellow: i32,
    pub red: i32,
}

pub const LINES: [Line; 10] = [
    line(1, "Vinícius Júnior", (541, "Real Madrid"), 140, PositionCategory::Attacker, 15, 6, 3, 0),
    line(2, "Kylian Mbappé", (85, "Paris Saint Germain"), 61, PositionCategory::Attacker, 27, 7, 4, 0),
    line(3, "Erling Haaland", (50, "Manchester City"), 39, PositionCategory::Attacker, 27, 5, 1, 0),
    line(4, "Jude Bellingham", (541, "Real Madrid"), 140, PositionCategory::Midfielder, 19, 6, 8, 1),
    line(5, "Virgil van Dijk", (40, "Liverpool"), 39, PositionCategory::Defender, 2, 2, 3, 0),
    line(6, "Alisson Becker", (40, "Liverpool"), 39, PositionCategory::Goalkeeper, 0, 0, 1, 0),
    line(7, "Germán Cano", (124, "Fluminense"), 71, PositionCategory::Attacker, 13, 3, 6, 0),
    line(8, "Harry Kane", (157, "Bayern Munich"), 78, PositionCategory::Attacker, 36, 8, 2, 0),
    line(9, "Rodri", (50, "Manchester City"), 39, PositionCategory::Midfielder, 8, 9, 10, 1),
    Line {
        minutes: 900,
        games: 5,
        ..line(10, "Broken Record", (1, "Nowhere FC"), 39, PositionCategory::Midfielder, 1, 1, 0, 0)
    },
];

#[allow(clippy::too_many_arguments)]
const fn line(
    id: PlayerId,
    name: &'static str,
    team: (TeamId, &'static str),
    league: LeagueId,
    position: PositionCategory,
    goals: i32,
    assists: i32,
    yellow: i32,
    red: i32,
) -> Line {
    Line {
        id,
        name,
        team,
        league,
        position,
        games: 30,
        minutes: 2500,
        goals,
        assists,
        yellow,
        red,
    }
}

impl Line {
    pub fn record(&self, season: Season) -> SeasonRecord {
        SeasonRecord {
            player: Player::new(self.id, self.name),
            team: Team::new(self.team.0, self.team.1),
            league_id: self.league,
            season,
            position: self.position,
            statistics: SeasonStatistics {
                games: self.games,
                goals: self.goals,
                assists: self.assists,
                minutes: self.minutes,
                rating: Some(7.0),
                yellow_cards: self.yellow,
                red_cards: self.red,
                ..SeasonStatistics::default()
            },
        }
    }
}

pub fn reference_leagues() -> Vec<League> {
    get_reference_leagues().iter().map(|l| l.to_league()).collect()
}

pub fn fixture_records(season: Season) -> Vec<SeasonRecord> {
    LINES.iter().map(|l| l.record(season)).collect()
}

pub fn fixture_source() -> Arc<MemoryStatisticsSource> {
    Arc::new(MemoryStatisticsSource::new(
        reference_leagues(),
        fixture_records(SEASON),
    ))
}

pub fn query_service(source: Arc<MemoryStatisticsSource>, config: &AppConfig) -> QueryService {
    QueryService::new(source, config)
}

/// Façade over the fixture with the default season already computed
pub fn computed_service() -> QueryService {
    let service = query_service(fixture_source(), &AppConfig::default());
    service.recalculate(Some(SEASON)).unwrap();
    service
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
