//! SQLite connection helpers.
//!
//! Provides [`connect_sqlite`] that opens a connection and applies the
//! PRAGMAs the workflow engine depends on: WAL journaling (readers don't
//! block the single writer), foreign_keys=ON (the task/attribute cascades),
//! and a 5000ms busy_timeout so a second writer waits for `BEGIN IMMEDIATE`
//! instead of failing.
//!
//! Example:
//! ```no_run
//! use leasing_engine::db::connection::connect_sqlite;
//!
//! let path = std::env::temp_dir().join("leasing_example.db");
//! let _conn = connect_sqlite(path.to_str().unwrap()).expect("open sqlite");
//! ```

use diesel::{Connection, RunQueryDsl, SqliteConnection, sql_query};

/// Strip an optional `sqlite:`/`sqlite://` scheme; bare paths pass through.
fn database_path(database_url: &str) -> &str {
    database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url)
}

/// Open a SQLite connection and apply connection-wide PRAGMAs.
pub fn connect_sqlite(database_url: &str) -> anyhow::Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_path(database_url))?;

    sql_query("PRAGMA journal_mode=WAL;").execute(&mut conn)?;
    sql_query("PRAGMA foreign_keys=ON;").execute(&mut conn)?;
    sql_query("PRAGMA busy_timeout=5000;").execute(&mut conn)?;
    Ok(conn)
}
