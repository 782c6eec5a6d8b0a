//! Padboard Thumbnails
//!
//! HTTP client for the external image-generation service. Given a sound
//! name and an API credential it requests one square icon-style image and
//! returns it as an embeddable `data:` URI, ready to store inline in the
//! library summary.
//!
//! Failures are per-request and never fatal to an import batch; callers
//! collect them and fall back to default icons. Quota exhaustion is
//! distinguishable from other failures for user messaging.
//!
//! # Example
//!
//! ```ignore
//! use pad_thumbs::ThumbnailClient;
//!
//! let client = ThumbnailClient::new()?;
//! let data_uri = client.generate("airhorn", "api-key").await?;
//! assert!(data_uri.starts_with("data:image/"));
//! ```

mod client;
mod error;
mod types;

pub use client::ThumbnailClient;
pub use error::{Result, ThumbnailError};
pub use types::{
    GenerateImageRequest, GenerateImageResponse, GenerationParameters, Prediction, PromptInstance,
};
