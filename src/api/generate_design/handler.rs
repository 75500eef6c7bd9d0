// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Design generation endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use super::request::GenerateDesignRequest;
use super::response::GenerateDesignResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::{ApiErrorResponse, AppState};

/// POST /api/generate-tshirt-design - Turn a prompt into a product listing
///
/// Pipeline (strictly sequential, first failure aborts):
/// 1. Validate request
/// 2. Refine the prompt against the color catalog
/// 3. Generate the design image
/// 4. Upload the image and create the Printify product
///
/// # Errors
/// - 400 Bad Request: empty or over-long prompt
/// - 500 Internal Server Error: any stage failure, with the upstream
///   provider's error payload under `details` when available
pub async fn generate_design_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateDesignRequest>,
) -> Result<Json<GenerateDesignResponse>, ApiErrorResponse> {
    debug!(
        "Design request received: prompt_len={}",
        request.prompt.len()
    );

    if let Err(e) = request.validate() {
        warn!("Design request validation failed: {}", e);
        return Err(ApiErrorResponse(ApiError::InvalidRequest(e)));
    }

    info!("Received prompt: {}", request.prompt);

    let outcome = state.pipeline.run(&request.prompt).await.map_err(|e| {
        warn!("Design pipeline failed: {}", e);
        ApiErrorResponse(ApiError::Pipeline(e))
    })?;

    info!(
        "Design pipeline complete: product={}, color={}",
        outcome.product_id, outcome.selected_color
    );

    Ok(Json(GenerateDesignResponse::from_outcome(outcome)))
}
