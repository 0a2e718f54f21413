use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::Team;

pub fn upsert_team(conn: &Connection, team: &Team) -> Result<()> {
    let sql = "INSERT INTO teams (id, name, country) VALUES (?1, ?2, ?3) \
               ON CONFLICT(id) DO UPDATE SET name = excluded.name, country = excluded.country";

    conn.execute(sql, params![team.id, team.name, team.country])
        .context("Failed to upsert team")?;
    Ok(())
}
