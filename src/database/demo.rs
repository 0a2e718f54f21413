use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;

use crate::domain::{LeagueId, Player, PlayerId, Season, SeasonStatistics, Team, TeamId};

use super::statistics::{upsert_statistics, StatisticsKey};
use super::{players, teams};

pub const DEMO_SEASON: Season = 2023;

struct DemoPlayer {
    id: PlayerId,
    name: &'static str,
    nationality: &'static str,
    birth_date: (i32, u32, u32),
    height_cm: u16,
    weight_kg: u16,
    team_id: TeamId,
    league_id: LeagueId,
    position: &'static str,
    // games, goals, assists, minutes
    volume: (i32, i32, i32, i32),
    rating: f64,
    // yellow, red, penalties scored, penalties missed
    discipline: (i32, i32, i32, i32),
}

const DEMO_TEAMS: &[(TeamId, &str, &str)] = &[
    (541, "Real Madrid", "Spain"),
    (85, "Paris Saint Germain", "France"),
    (50, "Manchester City", "England"),
    (40, "Liverpool", "England"),
    (505, "Inter", "Italy"),
    (157, "Bayern Munich", "Germany"),
    (124, "Fluminense", "Brazil"),
];

const DEMO_PLAYERS: &[DemoPlayer] = &[
    DemoPlayer {
        id: 762,
        name: "Vinícius Júnior",
        nationality: "Brazil",
        birth_date: (2000, 7, 12),
        height_cm: 176,
        weight_kg: 73,
        team_id: 541,
        league_id: 140,
        position: "Left Winger",
        volume: (28, 15, 6, 2340),
        rating: 8.2,
        discipline: (3, 0, 2, 0),
    },
    DemoPlayer {
        id: 278,
        name: "Kylian Mbappé",
        nationality: "France",
        birth_date: (1998, 12, 20),
        height_cm: 178,
        weight_kg: 73,
        team_id: 85,
        league_id: 61,
        position: "Centre-Forward",
        volume: (29, 27, 7, 2508),
        rating: 8.1,
        discipline: (4, 0, 6, 1),
    },
    DemoPlayer {
        id: 1100,
        name: "Erling Haaland",
        nationality: "Norway",
        birth_date: (2000, 7, 21),
        height_cm: 195,
        weight_kg: 88,
        team_id: 50,
        league_id: 39,
        position: "Centre-Forward",
        volume: (31, 27, 5, 2552),
        rating: 7.9,
        discipline: (1, 0, 7, 1),
    },
    DemoPlayer {
        id: 129718,
        name: "Jude Bellingham",
        nationality: "England",
        birth_date: (2003, 6, 29),
        height_cm: 186,
        weight_kg: 75,
        team_id: 541,
        league_id: 140,
        position: "Attacking Midfield",
        volume: (28, 19, 6, 2380),
        rating: 8.0,
        discipline: (8, 1, 0, 0),
    },
    DemoPlayer {
        id: 217,
        name: "Lautaro Martínez",
        nationality: "Argentina",
        birth_date: (1997, 8, 22),
        height_cm: 174,
        weight_kg: 72,
        team_id: 505,
        league_id: 135,
        position: "Centre-Forward",
        volume: (33, 24, 3, 2672),
        rating: 7.6,
        discipline: (5, 0, 4, 0),
    },
    DemoPlayer {
        id: 184,
        name: "Harry Kane",
        nationality: "England",
        birth_date: (1993, 7, 28),
        height_cm: 188,
        weight_kg: 86,
        team_id: 157,
        league_id: 78,
        position: "Centre-Forward",
        volume: (32, 36, 8, 2800),
        rating: 8.1,
        discipline: (2, 0, 9, 0),
    },
    DemoPlayer {
        id: 290,
        name: "Virgil van Dijk",
        nationality: "Netherlands",
        birth_date: (1991, 7, 8),
        height_cm: 193,
        weight_kg: 92,
        team_id: 40,
        league_id: 39,
        position: "Centre-Back",
        volume: (36, 2, 2, 3190),
        rating: 7.3,
        discipline: (3, 0, 0, 0),
    },
    DemoPlayer {
        id: 280,
        name: "Alisson Becker",
        nationality: "Brazil",
        birth_date: (1992, 10, 2),
        height_cm: 193,
        weight_kg: 91,
        team_id: 40,
        league_id: 39,
        position: "Goalkeeper",
        volume: (28, 0, 0, 2520),
        rating: 7.0,
        discipline: (1, 0, 0, 0),
    },
    DemoPlayer {
        id: 10051,
        name: "Germán Cano",
        nationality: "Argentina",
        birth_date: (1988, 1, 2),
        height_cm: 176,
        weight_kg: 76,
        team_id: 124,
        league_id: 71,
        position: "Centre-Forward",
        volume: (35, 13, 3, 2760),
        rating: 7.1,
        discipline: (6, 0, 3, 2),
    },
    DemoPlayer {
        id: 44,
        name: "Rodri",
        nationality: "Spain",
        birth_date: (1996, 6, 22),
        height_cm: 191,
        weight_kg: 82,
        team_id: 50,
        league_id: 39,
        position: "Defensive Midfield",
        volume: (34, 8, 9, 2931),
        rating: 7.6,
        discipline: (10, 1, 0, 0),
    },
];

impl DemoPlayer {
    fn to_player(&self) -> Player {
        let (year, month, day) = self.birth_date;
        Player {
            id: self.id,
            name: self.name.to_string(),
            nationality: Some(self.nationality.to_string()),
            birth_date: NaiveDate::from_ymd_opt(year, month, day),
            height_cm: Some(self.height_cm),
            weight_kg: Some(self.weight_kg),
        }
    }

    fn to_statistics(&self) -> SeasonStatistics {
        let (games, goals, assists, minutes) = self.volume;
        let (yellow_cards, red_cards, penalties_scored, penalties_missed) = self.discipline;
        SeasonStatistics {
            games,
            goals,
            assists,
            minutes,
            rating: Some(self.rating),
            yellow_cards,
            red_cards,
            penalties_scored,
            penalties_missed,
        }
    }
}

/// Loads a small set of well-known players for the demo season.
/// Expects the reference leagues to be seeded already.
pub fn insert_demo_dataset(conn: &mut Connection) -> Result<usize> {
    let tx = conn.transaction()?;

    for &(id, name, country) in DEMO_TEAMS {
        let team = Team {
            id,
            name: name.to_string(),
            country: Some(country.to_string()),
        };
        teams::upsert_team(&tx, &team)?;
    }

    for demo in DEMO_PLAYERS {
        players::upsert_player(&tx, &demo.to_player())?;
        let key = StatisticsKey {
            player_id: demo.id,
            team_id: demo.team_id,
            league_id: demo.league_id,
            season: DEMO_SEASON,
        };
        upsert_statistics(&tx, key, Some(demo.position), &demo.to_statistics())?;
    }

    tx.commit()?;
    log::info!(
        "Inserted {} demo players for season {}",
        DEMO_PLAYERS.len(),
        DEMO_SEASON
    );
    Ok(DEMO_PLAYERS.len())
}
