use r2d2_sqlite::SqliteConnectionManager;

use crate::config::DatabaseSettings;
use crate::errors::Result;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::file(&settings.path), settings);
    let pool = r2d2::Pool::builder()
        .max_size(settings.pool_size)
        .connection_timeout(settings.connection_timeout())
        .build(manager)?;

    log::debug!("Opened connection pool for {}", settings.path);
    Ok(pool)
}

/// Pool over a private in-memory database.
///
/// Every in-memory connection is its own database, so the pool holds exactly
/// one connection and never recycles it.
pub fn create_memory_pool() -> Result<DbPool> {
    let settings = DatabaseSettings::default();
    let manager = build_manager(SqliteConnectionManager::memory(), &settings);
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_timeout(settings.connection_timeout())
        .build(manager)?;

    Ok(pool)
}

fn build_manager(
    manager: SqliteConnectionManager,
    settings: &DatabaseSettings,
) -> SqliteConnectionManager {
    let busy_timeout = settings.busy_timeout();
    manager.with_init(move |conn| {
        conn.busy_timeout(busy_timeout)?;
        // Cascading deletes depend on this, and SQLite leaves it off per connection.
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    })
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    Ok(pool.get()?)
}
