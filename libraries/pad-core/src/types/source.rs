//! Import input types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a candidate sound comes from during import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Audio file on the local filesystem
    LocalFile(PathBuf),
    /// Remote absolute URL
    RemoteUrl(String),
}

/// A named sound source supplied to the import pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundSource {
    /// Display name derived from the file or URL
    pub name: String,
    /// Local file or remote URL
    pub kind: SourceKind,
}

impl SoundSource {
    /// Create a source backed by a local file
    pub fn local(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind: SourceKind::LocalFile(path.into()),
        }
    }

    /// Create a source backed by a remote URL
    pub fn remote(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SourceKind::RemoteUrl(url.into()),
        }
    }
}
