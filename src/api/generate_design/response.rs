// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Design generation response types

use serde::{Deserialize, Serialize};

use crate::pipeline::DesignOutcome;

/// Response body for POST /api/generate-tshirt-design
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDesignResponse {
    pub message: String,

    /// The prompt exactly as the user submitted it
    pub original_prompt: String,

    /// The model-refined design description
    pub refined_prompt: String,

    /// The model's color suggestion, absent when it gave none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_color: Option<String>,

    /// The color variant actually selected for the listing
    pub selected_color: String,

    /// URL of the generated artwork
    pub generated_image_url: String,

    /// Front mock-up rendered by the print provider, absent when none exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printify_mockup_url: Option<String>,

    /// Identifier of the created product listing
    pub printify_product_id: String,
}

impl GenerateDesignResponse {
    /// Build the success response from a pipeline outcome
    pub fn from_outcome(outcome: DesignOutcome) -> Self {
        Self {
            message: "T-shirt design created successfully".to_string(),
            original_prompt: outcome.original_prompt,
            refined_prompt: outcome.refined_prompt,
            suggested_color: outcome.suggested_color,
            selected_color: outcome.selected_color,
            generated_image_url: outcome.generated_image_url,
            printify_mockup_url: outcome.mockup_url,
            printify_product_id: outcome.product_id,
        }
    }
}
