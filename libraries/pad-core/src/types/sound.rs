//! Sound entry types: the runtime form rendered on the board and the
//! serializable form persisted in the settings store.

use serde::{Deserialize, Serialize};

use crate::types::SoundId;

/// Built-in symbolic icons used when no thumbnail image is available.
///
/// The set is fixed; stored entries reference an icon by index and the
/// index wraps, so old data with out-of-range indexes still resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultIcon {
    /// Loudspeaker
    Speaker,
    /// Musical note
    Note,
    /// Bell
    Bell,
    /// Warning triangle
    Alert,
    /// Sparkles
    Sparkle,
    /// Smiling face
    Smile,
}

impl DefaultIcon {
    /// Number of icons in the default set
    pub const COUNT: usize = 6;

    /// Select a default icon by position, wrapping around the set
    pub fn for_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Self::Speaker,
            1 => Self::Note,
            2 => Self::Bell,
            3 => Self::Alert,
            4 => Self::Sparkle,
            _ => Self::Smile,
        }
    }

    /// Position of this icon within the default set
    pub fn index(self) -> usize {
        match self {
            Self::Speaker => 0,
            Self::Note => 1,
            Self::Bell => 2,
            Self::Alert => 3,
            Self::Sparkle => 4,
            Self::Smile => 5,
        }
    }
}

/// What a sound button shows: a generated/remote image, or a default icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonFace {
    /// Default symbolic icon
    Icon(DefaultIcon),
    /// Image reference: a `data:` URI or a remote path
    Image(String),
}

impl ButtonFace {
    /// Whether this face is an image rather than a default icon
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }
}

/// Runtime sound entry, ready for rendering and playback.
///
/// `playable_url` is always fully resolved: either a remote absolute URL or
/// the path of a media lease materialized from the blob store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sound {
    /// Unique identifier
    pub id: SoundId,
    /// Display name
    pub name: String,
    /// Resolved address consumable directly by a playback mechanism
    pub playable_url: String,
    /// What the button shows
    pub face: ButtonFace,
}

impl Sound {
    /// Create a sound entry
    pub fn new(
        id: SoundId,
        name: impl Into<String>,
        playable_url: impl Into<String>,
        face: ButtonFace,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            playable_url: playable_url.into(),
            face,
        }
    }

    /// Create a sound entry for a remote clip with a default icon
    pub fn remote(
        id: SoundId,
        name: impl Into<String>,
        url: impl Into<String>,
        icon: DefaultIcon,
    ) -> Self {
        Self::new(id, name, url, ButtonFace::Icon(icon))
    }
}

/// Where a stored entry's audio lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredLocation<'a> {
    /// Remote absolute URL, stored by reference
    Remote(&'a str),
    /// Key of a blob held in the library store
    Blob(&'a str),
}

/// Serializable sound entry, persisted as JSON in the settings store.
///
/// Exactly one of `url` / `blob_key` is set; `icon_index` is only set when
/// `image_url` is absent. [`StorableSound::location`] enforces the first
/// invariant at the read boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorableSound {
    /// Unique identifier
    pub id: SoundId,
    /// Display name
    pub name: String,
    /// Default icon position; fallback when no image was generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_index: Option<u32>,
    /// Generated thumbnail (`data:` URI) or remote image path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Remote audio URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Key of the audio blob in the library store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_key: Option<String>,
}

impl StorableSound {
    /// Resolve where the audio lives.
    ///
    /// Returns `None` for ill-formed entries (neither or both of
    /// `url`/`blob_key` set); such entries cannot be restored.
    pub fn location(&self) -> Option<StoredLocation<'_>> {
        match (self.url.as_deref(), self.blob_key.as_deref()) {
            (Some(url), None) => Some(StoredLocation::Remote(url)),
            (None, Some(key)) => Some(StoredLocation::Blob(key)),
            _ => None,
        }
    }

    /// Resolve what the button shows, image winning over icon.
    ///
    /// An unset `icon_index` defaults to position 0.
    pub fn face(&self) -> ButtonFace {
        match &self.image_url {
            Some(image) => ButtonFace::Image(image.clone()),
            None => ButtonFace::Icon(DefaultIcon::for_index(
                self.icon_index.unwrap_or(0) as usize
            )),
        }
    }
}
