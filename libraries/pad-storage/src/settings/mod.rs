//! Application settings
//!
//! Persistent key-value settings with JSON-serialized values. The sound
//! library summary and the thumbnail API credential both live here; absence
//! of either key is a valid state and callers fall back to defaults.
//!
//! # Example
//!
//! ```rust,no_run
//! use pad_storage::settings;
//! # async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//! settings::set_setting(pool, settings::SETTING_API_CREDENTIAL, &serde_json::json!("k-123")).await?;
//! let key = settings::get_setting(pool, settings::SETTING_API_CREDENTIAL).await?;
//! # Ok(())
//! # }
//! ```

use sqlx::{Row, SqlitePool};

use crate::error::StorageError;
use crate::Result;

// Setting key constants
/// Serialized array of storable sound entries (the library summary)
pub const SETTING_SOUND_LIBRARY: &str = "library.sounds";

/// Plaintext API credential for thumbnail generation
pub const SETTING_API_CREDENTIAL: &str = "thumbnails.api_key";

/// Get a single setting value
///
/// # Returns
///
/// Returns `Ok(Some(value))` if the setting exists, `Ok(None)` if not found
///
/// # Errors
///
/// Returns an error if the database query fails or JSON deserialization fails
pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<serde_json::Value>> {
    let result = sqlx::query("SELECT value FROM app_settings WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    match result {
        Some(row) => {
            let raw: String = row.get("value");
            let value: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|e| StorageError::SerializationError(e.to_string()))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Set a setting value
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `key` - Setting key
/// * `value` - Setting value (will be JSON-serialized)
///
/// # Errors
///
/// Returns an error if the database query fails or JSON serialization fails
pub async fn set_setting(pool: &SqlitePool, key: &str, value: &serde_json::Value) -> Result<()> {
    let value_str = serde_json::to_string(value)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO app_settings (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value_str)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a setting
///
/// # Returns
///
/// Returns `Ok(true)` if a setting was deleted, `Ok(false)` if no setting was found
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn delete_setting(pool: &SqlitePool, key: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM app_settings WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
