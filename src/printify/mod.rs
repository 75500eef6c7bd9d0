// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Print-on-demand integration (Printify REST API)
//!
//! Provides:
//! - A thin REST client for catalog, upload, shop and product endpoints
//! - Blueprint/variant selection rules (t-shirt heuristic, color matching)
//! - Product assembly from a generated design image to a sellable listing

pub mod client;
pub mod product;
pub mod selection;
pub mod types;

// Re-export commonly used types
pub use client::PrintifyClient;
pub use product::ProductAssembler;
pub use types::{PrintProduct, PrintifyError, ProductImage, Variant, VariantSelection};
