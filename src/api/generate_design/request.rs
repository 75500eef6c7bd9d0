// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Design generation request types

use serde::{Deserialize, Serialize};

/// Request body for POST /api/generate-tshirt-design
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDesignRequest {
    /// Free-text design prompt (required, max 1000 chars)
    pub prompt: String,
}

impl GenerateDesignRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("Prompt cannot be empty".to_string());
        }
        if self.prompt.len() > 1000 {
            return Err("Prompt too long (max 1000 characters)".to_string());
        }
        Ok(())
    }
}
