//! Connection pool and migration plumbing.

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::error::LedgerResult;

/// Open a pool against a SQLite URL (e.g. `sqlite:coinshop.db` or
/// `sqlite::memory:`), creating the database file if missing.
///
/// WAL keeps readers from blocking the single writer; the busy timeout makes
/// concurrent write transactions queue instead of failing immediately.
pub async fn connect(url: &str) -> LedgerResult<SqlitePool> {
    let options = url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Apply the embedded workspace migrations.
pub async fn migrate(pool: &SqlitePool) -> LedgerResult<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
