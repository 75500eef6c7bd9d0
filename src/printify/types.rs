// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for the Printify integration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A product template offered by the print provider (e.g. a t-shirt style)
#[derive(Debug, Clone, Deserialize)]
pub struct Blueprint {
    pub id: u64,
    pub title: String,
}

/// A manufacturing partner offering a blueprint in specific variants
#[derive(Debug, Clone, Deserialize)]
pub struct PrintProvider {
    pub id: u64,
    pub title: String,
}

/// One concrete size/color SKU of a blueprint at a print provider
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    pub id: u64,
    pub options: VariantOptions,
}

/// Option values attached to a variant
#[derive(Debug, Clone, Deserialize)]
pub struct VariantOptions {
    pub color: String,
    #[serde(default)]
    pub size: Option<String>,
}

/// Wire shape of the variant listing endpoint
#[derive(Debug, Deserialize)]
pub struct VariantList {
    pub variants: Vec<Variant>,
}

/// A merchant shop on the provider account
#[derive(Debug, Clone, Deserialize)]
pub struct Shop {
    pub id: u64,
    pub title: String,
}

/// Result of an image upload
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImage {
    pub id: String,
}

/// A provider-rendered product image (mock-up)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub src: String,
    pub position: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Wire shape of a created product
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

/// A created product listing, augmented with the color that was chosen.
///
/// The provider's create response does not echo which color variant was
/// selected, so the assembler carries it through.
#[derive(Debug, Clone)]
pub struct PrintProduct {
    pub id: String,
    pub images: Vec<ProductImage>,
    pub selected_color: String,
}

/// The (blueprint, print provider, variant) triple resolved for one request.
///
/// Never cached across requests; provider catalogs may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSelection {
    pub blueprint_id: u64,
    pub print_provider_id: u64,
    pub variant_id: u64,
}

/// Errors from the Printify integration
#[derive(Debug, Error)]
pub enum PrintifyError {
    /// Non-2xx response from the Printify API, body preserved for diagnostics
    #[error("Printify API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// Transport-level failure
    #[error("request to Printify failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The generated image URL could not be parsed
    #[error("invalid image url: {0}")]
    InvalidImageUrl(String),

    /// The upload endpoint returned no usable image id
    #[error("image upload returned no id")]
    MissingUploadId,

    /// No blueprint in the catalog matched the t-shirt title heuristic
    #[error("no t-shirt blueprint found in catalog")]
    NoTshirtBlueprint,

    /// The blueprint has no print providers
    #[error("no print providers found for blueprint {blueprint_id}")]
    NoPrintProviders { blueprint_id: u64 },

    /// The (blueprint, provider) pair has no variants
    #[error("no variants found for blueprint {blueprint_id} at provider {print_provider_id}")]
    NoVariants {
        blueprint_id: u64,
        print_provider_id: u64,
    },

    /// The account has no shops to create the product in
    #[error("no shops found for this account")]
    NoShops,

    /// The create endpoint returned no product id
    #[error("product creation returned no id")]
    MissingProductId,
}
