//! Domain types for Padboard

mod ids;
mod sound;
mod source;

pub use ids::SoundId;
pub use sound::{ButtonFace, DefaultIcon, Sound, StorableSound, StoredLocation};
pub use source::{SoundSource, SourceKind};
