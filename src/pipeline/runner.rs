// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Design pipeline orchestration
//!
//! Sequences refinement, image generation and product assembly for one
//! request. Stages run strictly in order; the first failure aborts the run
//! with no compensation for already-completed side effects (an uploaded
//! image or created listing stays where it is).

use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::stages::{ImageGenerator, ProductCreator, PromptRefiner};
use crate::colors::ColorCache;
use crate::imagegen::client::ImageGenError;
use crate::printify::types::{PrintifyError, ProductImage};
use crate::refinement::types::RefinementError;

/// The pipeline's result for one design request
#[derive(Debug, Clone)]
pub struct DesignOutcome {
    pub original_prompt: String,
    pub refined_prompt: String,
    pub suggested_color: Option<String>,
    pub selected_color: String,
    pub generated_image_url: String,
    pub mockup_url: Option<String>,
    pub product_id: String,
}

/// First failure of any pipeline stage
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("prompt refinement failed: {0}")]
    Refinement(#[from] RefinementError),

    #[error("image generation failed: {0}")]
    ImageGeneration(#[from] ImageGenError),

    #[error("product creation failed: {0}")]
    ProductCreation(#[from] PrintifyError),
}

impl PipelineError {
    /// The upstream provider's error payload, when the failing stage carried
    /// one. Parsed as JSON when the body is JSON, else the raw text.
    pub fn upstream_details(&self) -> Option<serde_json::Value> {
        let message = match self {
            PipelineError::Refinement(RefinementError::Api { message, .. }) => message,
            PipelineError::ImageGeneration(ImageGenError::Api { message, .. }) => message,
            PipelineError::ProductCreation(PrintifyError::Api { message, .. }) => message,
            _ => return None,
        };
        if message.is_empty() {
            return None;
        }
        Some(
            serde_json::from_str(message)
                .unwrap_or_else(|_| serde_json::Value::String(message.clone())),
        )
    }
}

/// Orchestrates the three pipeline stages over the shared color catalog
pub struct DesignPipeline {
    refiner: Arc<dyn PromptRefiner>,
    generator: Arc<dyn ImageGenerator>,
    creator: Arc<dyn ProductCreator>,
    colors: Arc<ColorCache>,
}

impl DesignPipeline {
    /// Create a pipeline from its stage implementations
    pub fn new(
        refiner: Arc<dyn PromptRefiner>,
        generator: Arc<dyn ImageGenerator>,
        creator: Arc<dyn ProductCreator>,
        colors: Arc<ColorCache>,
    ) -> Self {
        Self {
            refiner,
            generator,
            creator,
            colors,
        }
    }

    /// Run the full pipeline for one user prompt
    pub async fn run(&self, prompt: &str) -> Result<DesignOutcome, PipelineError> {
        let catalog = self.colors.get();
        debug!(
            "Running design pipeline ({} catalog colors)",
            catalog.len()
        );

        let design = self.refiner.refine(prompt, &catalog).await?;
        let image_url = self.generator.generate(&design.refined_prompt).await?;
        let product = self
            .creator
            .create_product(
                &image_url,
                &design.refined_prompt,
                design.suggested_color.as_deref(),
            )
            .await?;

        let mockup_url = front_mockup_url(&product.images);

        Ok(DesignOutcome {
            original_prompt: prompt.to_string(),
            refined_prompt: design.refined_prompt,
            suggested_color: design.suggested_color,
            selected_color: product.selected_color,
            generated_image_url: image_url,
            mockup_url,
            product_id: product.id,
        })
    }
}

/// The mock-up image tagged with the front placement, if the provider
/// rendered one
pub fn front_mockup_url(images: &[ProductImage]) -> Option<String> {
    images
        .iter()
        .find(|image| image.position == "front")
        .map(|image| image.src.clone())
}
