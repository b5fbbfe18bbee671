use crate::errors::{Result, StorageContext};

use super::connection::DbConn;
use super::models::Standing;

/// Every player, fewest wins first. Ties fall back to registration order.
pub fn list_standings(conn: &mut DbConn) -> Result<Vec<Standing>> {
    let sql = "SELECT id, name, wins, matches FROM players ORDER BY wins ASC, id ASC";

    let mut stmt = conn.prepare(sql).storage_context("Failed to prepare standings")?;
    let rows = stmt
        .query_map([], parse_standing_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .storage_context("Failed to load standings")?;

    Ok(rows)
}

fn parse_standing_row(row: &rusqlite::Row) -> rusqlite::Result<Standing> {
    Ok(Standing {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
    })
}
