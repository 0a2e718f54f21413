use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{
    LeagueId, Player, PlayerId, PositionCategory, Season, SeasonRecord, SeasonStatistics, Team,
    TeamId,
};

/// Keys of one stored statistics row
#[derive(Debug, Clone, Copy)]
pub struct StatisticsKey {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub league_id: LeagueId,
    pub season: Season,
}

/// Inserts or replaces the row for (player, season, league).
/// `position` is the provider's raw label and is classified on read.
pub fn upsert_statistics(
    conn: &Connection,
    key: StatisticsKey,
    position: Option<&str>,
    stats: &SeasonStatistics,
) -> Result<()> {
    let sql = "INSERT INTO player_statistics \
               (player_id, team_id, league_id, season, position, games, goals, assists, minutes, \
                rating, yellow_cards, red_cards, penalties_scored, penalties_missed) \
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14) \
               ON CONFLICT(player_id, season, league_id) DO UPDATE SET \
               team_id = excluded.team_id, position = excluded.position, games = excluded.games, \
               goals = excluded.goals, assists = excluded.assists, minutes = excluded.minutes, \
               rating = excluded.rating, yellow_cards = excluded.yellow_cards, \
               red_cards = excluded.red_cards, penalties_scored = excluded.penalties_scored, \
               penalties_missed = excluded.penalties_missed, updated_at = CURRENT_TIMESTAMP";

    conn.execute(
        sql,
        params![
            key.player_id,
            key.team_id,
            key.league_id,
            key.season,
            position,
            stats.games,
            stats.goals,
            stats.assists,
            stats.minutes,
            stats.rating,
            stats.yellow_cards,
            stats.red_cards,
            stats.penalties_scored,
            stats.penalties_missed
        ],
    )
    .with_context(|| {
        format!(
            "Failed to store statistics for player {} in season {}",
            key.player_id, key.season
        )
    })?;
    Ok(())
}

fn parse_record_row(row: &rusqlite::Row) -> rusqlite::Result<SeasonRecord> {
    let label: Option<String> = row.get(11)?;

    Ok(SeasonRecord {
        player: Player {
            id: row.get(0)?,
            name: row.get(1)?,
            nationality: row.get(2)?,
            birth_date: row.get(3)?,
            height_cm: row.get(4)?,
            weight_kg: row.get(5)?,
        },
        team: Team {
            id: row.get(6)?,
            name: row.get(7)?,
            country: row.get(8)?,
        },
        league_id: row.get(9)?,
        season: row.get(10)?,
        position: PositionCategory::classify(label.as_deref()),
        statistics: SeasonStatistics {
            games: row.get(12)?,
            goals: row.get(13)?,
            assists: row.get(14)?,
            minutes: row.get(15)?,
            rating: row.get(16)?,
            yellow_cards: row.get(17)?,
            red_cards: row.get(18)?,
            penalties_scored: row.get(19)?,
            penalties_missed: row.get(20)?,
        },
    })
}

pub fn list_season_records(conn: &Connection, season: Season) -> Result<Vec<SeasonRecord>> {
    let sql = "SELECT p.id, p.name, p.nationality, p.birth_date, p.height_cm, p.weight_kg, \
                      t.id, t.name, t.country, \
                      s.league_id, s.season, s.position, s.games, s.goals, s.assists, s.minutes, \
                      s.rating, s.yellow_cards, s.red_cards, s.penalties_scored, s.penalties_missed \
               FROM player_statistics s \
               JOIN players p ON p.id = s.player_id \
               JOIN teams t ON t.id = s.team_id \
               WHERE s.season = ?1 \
               ORDER BY p.id, s.league_id";

    let mut stmt = conn.prepare(sql)?;
    let records = stmt
        .query_map(params![season], parse_record_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to load statistics for season {season}"))?;

    Ok(records)
}

pub fn count_for_season(conn: &Connection, season: Season) -> Result<i64> {
    let sql = "SELECT COUNT(*) FROM player_statistics WHERE season = ?1";
    conn.query_row(sql, params![season], |row| row.get(0))
        .context("Failed to count statistics rows")
}
