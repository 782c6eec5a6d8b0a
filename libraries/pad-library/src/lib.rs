//! Padboard Library Manager
//!
//! This crate owns the sound library lifecycle: restoring the persisted
//! library on startup, importing new batches of sounds (from a folder or a
//! URL list), and resetting back to the built-in defaults.
//!
//! # Architecture
//!
//! - `manager`: orchestration of restore / import / reset over the blob
//!   store and settings store
//! - `leases`: owned temp-file references that make blob audio playable,
//!   released together when the library is replaced
//! - `sources`: folder scanning and URL-list parsing into import sources
//!
//! # Example
//!
//! ```rust,no_run
//! use pad_library::SoundLibrary;
//! use pad_storage::{create_pool, run_migrations};
//! use pad_thumbs::ThumbnailClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://padboard.db").await?;
//! run_migrations(&pool).await?;
//!
//! let thumbs = ThumbnailClient::new()?;
//! let mut library = SoundLibrary::new(pool, thumbs, "/tmp/padboard-spool");
//! library.restore().await;
//!
//! for sound in library.sounds() {
//!     println!("{}: {}", sound.name, sound.playable_url);
//! }
//! # Ok(())
//! # }
//! ```

mod error;

pub mod leases;
pub mod manager;
pub mod sources;

pub use error::LibraryError;
pub use leases::{LeaseSet, MediaLease};
pub use manager::{ImportOutcome, SoundLibrary, ThumbnailAdvisory};
pub use sources::{parse_url_list, scan_folder, FolderScan};

/// Re-export of the crate result type
pub type Result<T> = std::result::Result<T, LibraryError>;
