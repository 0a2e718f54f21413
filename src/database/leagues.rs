use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{League, LeagueId};

pub fn upsert_league(conn: &Connection, league: &League) -> Result<()> {
    let sql = "INSERT INTO leagues (id, name, country, continent, multiplier) VALUES (?1, ?2, ?3, ?4, ?5) \
               ON CONFLICT(id) DO UPDATE SET name = excluded.name, country = excluded.country, \
               continent = excluded.continent, multiplier = excluded.multiplier";

    conn.execute(
        sql,
        params![league.id, league.name, league.country, league.continent, league.multiplier],
    )
    .context("Failed to upsert league")?;
    Ok(())
}

fn parse_league_row(row: &rusqlite::Row) -> rusqlite::Result<League> {
    Ok(League {
        id: row.get(0)?,
        name: row.get(1)?,
        country: row.get(2)?,
        continent: row.get(3)?,
        multiplier: row.get(4)?,
    })
}

pub fn list_all(conn: &Connection) -> Result<Vec<League>> {
    let sql = "SELECT id, name, country, continent, multiplier FROM leagues ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_league_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn update_multiplier(conn: &Connection, league_id: LeagueId, multiplier: f64) -> Result<bool> {
    let sql = "UPDATE leagues SET multiplier = ?1 WHERE id = ?2";
    let changed = conn
        .execute(sql, params![multiplier, league_id])
        .context("Failed to update league multiplier")?;
    Ok(changed > 0)
}
