//! Request and response types for the image-generation API.

use serde::{Deserialize, Serialize};

/// Request body for the predict endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateImageRequest {
    /// Prompt instances; always exactly one per request
    pub instances: Vec<PromptInstance>,
    /// Generation parameters
    pub parameters: GenerationParameters,
}

/// A single prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PromptInstance {
    /// Prompt text
    pub prompt: String,
}

/// Generation parameters for one request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParameters {
    /// Number of images to generate
    pub sample_count: u32,
    /// Aspect ratio, e.g. "1:1"
    pub aspect_ratio: String,
    /// MIME type of the returned image
    pub output_mime_type: String,
}

impl GenerateImageRequest {
    /// Build the request for a sound-button icon.
    pub fn for_sound(name: &str) -> Self {
        let prompt = format!(
            "A simple, clean, modern, flat, vector-style icon for a sound effect \
             named '{name}'. Centered on a solid, non-white, vibrant background \
             color. No text."
        );

        Self {
            instances: vec![PromptInstance { prompt }],
            parameters: GenerationParameters {
                sample_count: 1,
                aspect_ratio: "1:1".to_string(),
                output_mime_type: "image/jpeg".to_string(),
            },
        }
    }
}

/// Response body of the predict endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateImageResponse {
    /// Generated images; may be empty on content-policy rejections
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// One generated image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Image payload, base64-encoded
    #[serde(default)]
    pub bytes_base64_encoded: String,
    /// MIME type of the payload
    #[serde(default)]
    pub mime_type: Option<String>,
}
