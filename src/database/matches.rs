use rusqlite::{params, TransactionBehavior};

use crate::errors::{Result, StorageContext, TournamentError};

use super::connection::DbConn;
use super::models::{Match, PlayerId};
use super::players;

const MATCH_COLUMNS: &str = "id, winner, loser, created_at";

/// Record one match outcome.
///
/// The match row and both counter updates share a single transaction. Any
/// early return drops the transaction, which rolls everything back.
pub fn record_result(conn: &mut DbConn, winner: PlayerId, loser: PlayerId) -> Result<Match> {
    if winner == loser {
        return Err(TournamentError::SelfMatch { id: winner });
    }

    // Take the write lock up front so concurrent reporters wait on busy_timeout.
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .storage_context("Failed to begin match transaction")?;

    for id in [winner, loser] {
        if !players::exists(&tx, id)? {
            return Err(TournamentError::UnknownPlayer { id });
        }
    }

    let sql = format!("INSERT INTO matches (winner, loser) VALUES (?1, ?2) RETURNING {MATCH_COLUMNS}");
    let recorded = tx
        .query_row(&sql, params![winner, loser], parse_match_row)
        .storage_context("Failed to insert match")?;

    tx.execute(
        "UPDATE players SET matches = matches + 1 WHERE id IN (?1, ?2)",
        params![winner, loser],
    )
    .storage_context("Failed to update matches played")?;

    tx.execute(
        "UPDATE players SET wins = wins + 1 WHERE id = ?1",
        params![winner],
    )
    .storage_context("Failed to update wins")?;

    tx.commit().storage_context("Failed to commit match")?;
    Ok(recorded)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner: row.get(1)?,
        loser: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Match>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches ORDER BY id");

    let mut stmt = conn.prepare(&sql).storage_context("Failed to prepare match listing")?;
    let rows = stmt
        .query_map([], parse_match_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .storage_context("Failed to list matches")?;

    Ok(rows)
}

pub fn count(conn: &mut DbConn) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM matches", [], |row| row.get::<_, i64>(0))
        .storage_context("Failed to count matches")
}

/// Remove every match. Player counters are left as they are.
pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .storage_context("Failed to delete matches")
}
