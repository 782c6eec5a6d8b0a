//! Padboard Storage
//!
//! SQLite persistence layer for Padboard: the library blob store and the
//! key-value settings store, sharing one database file.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each concern owns its own queries (`blobs`,
//!   `settings`)
//! - **Blob Store**: raw audio bytes for locally imported sounds, keyed by
//!   opaque string keys, surviving restarts
//! - **Settings**: JSON values under well-known keys, including the
//!   serialized sound library summary and the thumbnail API credential
//!
//! # Example
//!
//! ```rust,no_run
//! use pad_storage::{blobs, create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://padboard.db").await?;
//! run_migrations(&pool).await?;
//!
//! blobs::put(&pool, "local-abc", b"...audio bytes...").await?;
//! let bytes = blobs::get(&pool, "local-abc").await?;
//! # Ok(())
//! # }
//! ```

mod error;

pub mod blobs;
pub mod settings;

pub use error::StorageError;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

// Embedded migrations, executed in order at startup
const MIGRATIONS: &[&str] = &[
    include_str!("../migrations/0001_create_sound_blobs.sql"),
    include_str!("../migrations/0002_create_app_settings.sql"),
];

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://padboard.db`)
///
/// # Errors
///
/// Returns an error if the connection cannot be established
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    Ok(pool)
}

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if a migration statement fails
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    for migration in MIGRATIONS {
        sqlx::query(migration)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }

    Ok(())
}
