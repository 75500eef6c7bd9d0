// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pipeline::PipelineError;

/// Failure body returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Errors surfaced by the HTTP layer
#[derive(Debug)]
pub enum ApiError {
    /// The request body failed validation
    InvalidRequest(String),
    /// A pipeline stage failed; the request is aborted with no partial result
    Pipeline(PipelineError),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) => 400,
            ApiError::Pipeline(_) => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        match self {
            ApiError::InvalidRequest(msg) => ErrorResponse {
                error: msg.clone(),
                details: None,
            },
            ApiError::Pipeline(e) => ErrorResponse {
                error: e.to_string(),
                details: e.upstream_details(),
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::Pipeline(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        ApiError::Pipeline(e)
    }
}
