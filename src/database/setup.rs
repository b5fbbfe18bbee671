use crate::errors::{Result, StorageContext};

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const DROP_SQL: &str = "DROP TABLE IF EXISTS matches; DROP TABLE IF EXISTS players;";

/// Create any missing tables. Safe to run against an existing database.
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    execute_script(conn, SCHEMA_SQL)?;
    log::debug!("Database schema ensured");
    Ok(())
}

/// Drop both tables and recreate them empty.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    let tx = conn
        .transaction()
        .storage_context("Failed to begin schema reset")?;
    execute_script(&tx, DROP_SQL)?;
    execute_script(&tx, SCHEMA_SQL)?;
    tx.commit().storage_context("Failed to commit schema reset")?;

    log::info!("Database schema reset successfully");
    Ok(())
}

fn execute_script(conn: &rusqlite::Connection, sql: &str) -> Result<()> {
    let statements = split_sql_statements(sql);

    for (idx, statement) in statements.iter().enumerate() {
        conn.execute(statement, [])
            .storage_context(&format!("Failed to execute statement {}", idx + 1))?;
    }

    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
