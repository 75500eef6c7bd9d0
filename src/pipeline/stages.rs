// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Typed stage interfaces for the design pipeline
//!
//! Each stage's contract is checked at its boundary instead of by
//! convention: `Prompt -> RefinedDesign -> image URL -> PrintProduct`.
//! The concrete provider clients implement these traits; tests substitute
//! their own implementations.

use async_trait::async_trait;

use crate::imagegen::client::{ImageGenClient, ImageGenError};
use crate::printify::product::ProductAssembler;
use crate::printify::types::{PrintProduct, PrintifyError};
use crate::refinement::client::RefinementClient;
use crate::refinement::types::{RefinedDesign, RefinementError};

/// Stage 1: refine a raw user prompt against the color catalog
#[async_trait]
pub trait PromptRefiner: Send + Sync {
    async fn refine(
        &self,
        user_prompt: &str,
        colors: &[String],
    ) -> Result<RefinedDesign, RefinementError>;
}

/// Stage 2: generate design artwork, returning its URL
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, refined_prompt: &str) -> Result<String, ImageGenError>;
}

/// Stage 3: upload the artwork and create a sellable listing
#[async_trait]
pub trait ProductCreator: Send + Sync {
    async fn create_product(
        &self,
        image_url: &str,
        description: &str,
        suggested_color: Option<&str>,
    ) -> Result<PrintProduct, PrintifyError>;
}

#[async_trait]
impl PromptRefiner for RefinementClient {
    async fn refine(
        &self,
        user_prompt: &str,
        colors: &[String],
    ) -> Result<RefinedDesign, RefinementError> {
        RefinementClient::refine(self, user_prompt, colors).await
    }
}

#[async_trait]
impl ImageGenerator for ImageGenClient {
    async fn generate(&self, refined_prompt: &str) -> Result<String, ImageGenError> {
        ImageGenClient::generate(self, refined_prompt).await
    }
}

#[async_trait]
impl ProductCreator for ProductAssembler {
    async fn create_product(
        &self,
        image_url: &str,
        description: &str,
        suggested_color: Option<&str>,
    ) -> Result<PrintProduct, PrintifyError> {
        ProductAssembler::create_product(self, image_url, description, suggested_color).await
    }
}
