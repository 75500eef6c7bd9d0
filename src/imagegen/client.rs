// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Replicate predictions client for design image generation

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const REPLICATE_API_URL: &str = "https://api.replicate.com/v1";

/// Stylistic qualifiers appended to every design prompt
const STYLE_SUFFIX: &str = "minimalist, elegant, suitable for screen printing";

/// Errors from image generation
#[derive(Debug, Error)]
pub enum ImageGenError {
    /// Non-2xx response from the predictions API, body preserved
    #[error("image API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// Transport-level failure
    #[error("request to image provider failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The prediction finished in a non-success state
    #[error("image generation did not succeed: {reason}")]
    Failed { reason: String },

    /// The prediction succeeded but produced no output URLs
    #[error("image provider returned an empty output")]
    EmptyOutput,
}

/// Client for generating design artwork from a refined prompt
pub struct ImageGenClient {
    api_token: String,
    model: String,
    base_url: String,
    client: Client,
}

impl ImageGenClient {
    /// Create a new image generation client.
    ///
    /// `model` is the provider's `owner/name` identifier.
    pub fn new(api_token: String, model: String) -> Self {
        Self::with_base_url(api_token, model, REPLICATE_API_URL)
    }

    /// Create a client against a different API root (used by tests)
    pub fn with_base_url(api_token: String, model: String, base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_token,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Generate a PNG design image, returning the first output URL.
    ///
    /// Uses a synchronous (`Prefer: wait`) prediction call; the request
    /// blocks until the provider finishes or the client timeout fires.
    pub async fn generate(&self, refined_prompt: &str) -> Result<String, ImageGenError> {
        let prompt = design_prompt(refined_prompt);
        info!("Generating image with prompt ({} chars)", prompt.len());

        let url = format!("{}/models/{}/predictions", self.base_url, self.model);
        let body = serde_json::json!({
            "input": {
                "prompt": prompt,
                "output_format": "png",
            }
        });

        debug!("Prediction POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Prefer", "wait")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ImageGenError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let prediction: PredictionResponse = response.json().await?;
        if prediction.status != "succeeded" {
            return Err(ImageGenError::Failed {
                reason: prediction.error.unwrap_or(prediction.status),
            });
        }

        let image_url = prediction
            .output
            .unwrap_or_default()
            .into_iter()
            .find(|url| !url.is_empty())
            .ok_or(ImageGenError::EmptyOutput)?;

        info!("Generated image URL: {}", image_url);
        Ok(image_url)
    }
}

/// Wrap a refined design description with the fixed stylistic qualifiers
fn design_prompt(refined_prompt: &str) -> String {
    format!("t-shirt design: {}, {}", refined_prompt, STYLE_SUFFIX)
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    status: String,
    #[serde(default)]
    output: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
}
