//! set up migrations

use anyhow::anyhow;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::db::connection::connect_sqlite;

/// Embedded Diesel migrations bundled with this crate.
///
/// These are applied by `run_sqlite` to bring the database schema up to date.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Runs pending Diesel migrations on a SQLite database at the given URL.
///
/// This sets the SQLite journal mode to WAL and applies all embedded migrations, returning an error on failure.
pub fn run_sqlite(url: &str) -> anyhow::Result<()> {
    // Reuse the centralized PRAGMAs (WAL, FKs, busy_timeout)
    let mut conn = connect_sqlite(url)?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!(e))?;

    Ok(())
}

/// Runs pending migrations for the given database URL.
///
/// Accepts bare file paths like "dev.db" as well as "sqlite:" URLs; the
/// scheme handling lives in [`connect_sqlite`].
pub fn run_all(database_url: &str) -> anyhow::Result<()> {
    run_sqlite(database_url)
}
