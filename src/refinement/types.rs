// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for prompt refinement

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::parser::ParseError;

/// Phrase every refined prompt must mention so the design can be applied to
/// any garment color
pub const TRANSPARENT_BACKGROUND: &str = "transparent background";

/// A refined design description plus the model's color suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedDesign {
    pub refined_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_color: Option<String>,
}

/// Append the transparent-background requirement when the model omitted it
pub fn ensure_transparent_background(refined_prompt: String) -> String {
    if refined_prompt.contains(TRANSPARENT_BACKGROUND) {
        refined_prompt
    } else {
        format!(
            "{} The design should have a transparent background.",
            refined_prompt
        )
    }
}

/// Errors from prompt refinement
#[derive(Debug, Error)]
pub enum RefinementError {
    /// Non-2xx response from the language-model API, body preserved
    #[error("language model API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// Transport-level failure
    #[error("request to language model failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned no choices
    #[error("language model returned no completion")]
    EmptyCompletion,

    /// The reply did not match the expected two-line shape
    #[error("malformed model reply: {0}")]
    Malformed(#[from] ParseError),
}
