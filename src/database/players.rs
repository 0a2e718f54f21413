use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::Player;

/// Biographical fields are written once; later upserts only refresh the name
pub fn upsert_player(conn: &Connection, player: &Player) -> Result<()> {
    let sql = "INSERT INTO players (id, name, nationality, birth_date, height_cm, weight_kg) \
               VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
               ON CONFLICT(id) DO UPDATE SET name = excluded.name";

    conn.execute(
        sql,
        params![
            player.id,
            player.name,
            player.nationality,
            player.birth_date,
            player.height_cm,
            player.weight_kg
        ],
    )
    .context("Failed to upsert player")?;
    Ok(())
}
