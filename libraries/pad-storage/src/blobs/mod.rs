//! Library blob store
//!
//! Durable key-value storage for the raw audio bytes of locally imported
//! sounds. Keys are opaque strings chosen by the caller; a `put` to an
//! existing key overwrites it. The whole store is cleared when the library
//! is replaced or reset.

use sqlx::{Row, SqlitePool};

use crate::Result;

/// Get the stored blob for a key
///
/// # Returns
///
/// Returns `Ok(Some(bytes))` if the blob exists, `Ok(None)` if never written
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn get(pool: &SqlitePool, key: &str) -> Result<Option<Vec<u8>>> {
    let row = sqlx::query("SELECT data FROM sound_blobs WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| row.get::<Vec<u8>, _>("data")))
}

/// Store a blob under a key, overwriting any existing blob
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn put(pool: &SqlitePool, key: &str, data: &[u8]) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO sound_blobs (key, data, created_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET data = excluded.data, created_at = excluded.created_at",
    )
    .bind(key)
    .bind(data)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove all stored blobs unconditionally
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn clear(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DELETE FROM sound_blobs").execute(pool).await?;

    Ok(())
}

/// Number of stored blobs
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sound_blobs")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
