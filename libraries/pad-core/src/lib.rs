//! Padboard Core
//!
//! Platform-agnostic domain types and error handling for Padboard.
//!
//! This crate defines:
//! - **Domain Types**: `Sound`, `StorableSound`, `SoundSource`, `DefaultIcon`
//! - **Defaults**: the built-in sound set shown before anything is imported
//! - **Error Handling**: unified `PadError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use pad_core::types::{DefaultIcon, Sound, SoundId};
//!
//! let sound = Sound::remote(
//!     SoundId::generate(),
//!     "airhorn",
//!     "https://example.com/airhorn.mp3",
//!     DefaultIcon::for_index(0),
//! );
//! assert_eq!(sound.name, "airhorn");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod defaults;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use defaults::default_sounds;
pub use error::{PadError, Result};
pub use types::{
    ButtonFace, DefaultIcon, Sound, SoundId, SoundSource, SourceKind, StorableSound,
    StoredLocation,
};
