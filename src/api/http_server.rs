use axum::{
    http::StatusCode,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::colors::available_colors_handler;
use super::errors::ApiError;
use super::generate_design::generate_design_handler;
use crate::colors::ColorCache;
use crate::pipeline::DesignPipeline;

/// Shared state for all HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<DesignPipeline>,
    pub color_cache: Arc<ColorCache>,
}

/// Start the API server and serve until the process exits
pub async fn start_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Design generation endpoint
        .route("/api/generate-tshirt-design", post(generate_design_handler))
        // Color catalog endpoint
        .route("/api/available-colors", get(available_colors_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::version::VERSION_NUMBER,
        "colorsCached": state.color_cache.get().len(),
    }))
}

// Error response wrapper
pub struct ApiErrorResponse(pub ApiError);

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let error_response = self.0.to_response();

        (status, Json(error_response)).into_response()
    }
}
