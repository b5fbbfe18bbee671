use rusqlite::{params, OptionalExtension};

use crate::errors::{Result, StorageContext};

use super::connection::DbConn;
use super::models::{Player, PlayerId};

const PLAYER_COLUMNS: &str = "id, name, wins, matches, created_at";

pub fn insert_player(conn: &mut DbConn, name: &str) -> Result<Player> {
    let sql = format!("INSERT INTO players (name) VALUES (?1) RETURNING {PLAYER_COLUMNS}");

    conn.query_row(&sql, params![name], parse_player_row)
        .storage_context("Failed to insert new player")
}

pub(crate) fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: PlayerId) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .storage_context("Failed to query player by id")
}

pub fn exists(conn: &rusqlite::Connection, id: PlayerId) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM players WHERE id = ?1)",
        params![id],
        |row| row.get::<_, bool>(0),
    )
    .storage_context("Failed to check player existence")
}

pub fn count(conn: &mut DbConn) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get::<_, i64>(0))
        .storage_context("Failed to count players")
}

/// Remove every player. Their matches go with them through the cascade.
pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .storage_context("Failed to delete players")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY id");

    let mut stmt = conn.prepare(&sql).storage_context("Failed to prepare player listing")?;
    let rows = stmt
        .query_map([], parse_player_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .storage_context("Failed to list players")?;

    Ok(rows)
}
