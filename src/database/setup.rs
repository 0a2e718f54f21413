use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::leagues::LeagueConfig;

use super::leagues;

pub fn reset_database(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::info!("Database schema reset successfully");
    Ok(())
}

pub fn seed_reference_leagues(conn: &Connection, reference: &[LeagueConfig]) -> Result<usize> {
    for entry in reference {
        leagues::upsert_league(conn, &entry.to_league())?;
    }
    log::info!("Seeded {} reference leagues", reference.len());
    Ok(reference.len())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
