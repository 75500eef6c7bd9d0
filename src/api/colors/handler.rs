// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Available-colors endpoint handler

use axum::{extract::State, Json};

use crate::api::http_server::AppState;

/// GET /api/available-colors - Current color catalog
///
/// Returns the cached catalog as a plain array of strings. Never touches the
/// network; between refreshes, repeated calls return identical results.
pub async fn available_colors_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.color_cache.get())
}
