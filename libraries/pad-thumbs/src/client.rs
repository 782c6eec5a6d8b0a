//! Thumbnail generation client.

use crate::error::{Result, ThumbnailError};
use crate::types::{GenerateImageRequest, GenerateImageResponse};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default base URL of the image-generation service.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Image-generation model used for thumbnails.
const MODEL: &str = "imagen-3.0-generate-002";

/// Client for the image-generation service.
///
/// Cheap to clone; clones share the underlying connection pool, which is
/// what lets an import batch issue its requests concurrently from spawned
/// tasks.
#[derive(Clone)]
pub struct ThumbnailClient {
    http: Client,
    base_url: String,
}

impl ThumbnailClient {
    /// Create a client against the default service endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Padboard/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ThumbnailError::Request)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Request one generated thumbnail for a sound name.
    ///
    /// Returns a `data:{mime};base64,{payload}` URI suitable for storing
    /// inline in the library summary.
    pub async fn generate(&self, name: &str, api_key: &str) -> Result<String> {
        if api_key.trim().is_empty() {
            return Err(ThumbnailError::MissingCredential);
        }
        if name.trim().is_empty() {
            return Err(ThumbnailError::MissingName);
        }

        let url = format!("{}/v1beta/models/{}:predict", self.base_url, MODEL);
        let request = GenerateImageRequest::for_sound(name);

        debug!(name = %name, url = %url, "Requesting generated thumbnail");

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ThumbnailError::ServiceUnreachable(e.to_string())
                } else {
                    ThumbnailError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ThumbnailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateImageResponse = response.json().await.map_err(|e| {
            ThumbnailError::InvalidResponse(format!("failed to parse response: {e}"))
        })?;

        let prediction = body.predictions.into_iter().next().ok_or_else(|| {
            ThumbnailError::InvalidResponse("response did not contain a generated image".into())
        })?;

        // Reject garbage payloads before they end up persisted inline
        let bytes = STANDARD
            .decode(&prediction.bytes_base64_encoded)
            .map_err(|_| {
                ThumbnailError::InvalidResponse("image payload is not valid base64".into())
            })?;
        if bytes.is_empty() {
            return Err(ThumbnailError::InvalidResponse(
                "image payload is empty".into(),
            ));
        }

        let mime_type = prediction
            .mime_type
            .unwrap_or_else(|| "image/jpeg".to_string());

        debug!(name = %name, bytes = bytes.len(), mime = %mime_type, "Thumbnail generated");

        Ok(format!(
            "data:{};base64,{}",
            mime_type, prediction.bytes_base64_encoded
        ))
    }
}
