// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP API surface
//!
//! Endpoints:
//! - `POST /api/generate-tshirt-design` - run the design pipeline
//! - `GET /api/available-colors` - current color catalog
//! - `GET /health` - liveness and version info

pub mod colors;
pub mod errors;
pub mod generate_design;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{start_server, AppState};
