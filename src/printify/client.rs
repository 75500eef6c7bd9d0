// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Printify REST API client
//!
//! Thin wrapper over the catalog, upload, shop and product endpoints.
//! All calls are authenticated with a bearer token; non-2xx responses are
//! surfaced with their body preserved for diagnostics.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::types::{
    Blueprint, PrintProvider, PrintifyError, Product, Shop, UploadedImage, Variant, VariantList,
};

const PRINTIFY_API_URL: &str = "https://api.printify.com/v1";

/// Printify REST API client
pub struct PrintifyClient {
    api_token: String,
    base_url: String,
    client: Client,
}

impl PrintifyClient {
    /// Create a new client against the production API
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, PRINTIFY_API_URL)
    }

    /// Create a client against a different API root (used by tests)
    pub fn with_base_url(api_token: String, base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Upload a generated image by its remote URL.
    ///
    /// The file name is derived from the URL's path component.
    pub async fn upload_image(&self, image_url: &str) -> Result<UploadedImage, PrintifyError> {
        let file_name = derive_file_name(image_url)?;
        let body = serde_json::json!({
            "url": image_url,
            "file_name": file_name,
        });

        let uploaded: UploadedImage = self.post_json("/uploads/images.json", &body).await?;
        if uploaded.id.is_empty() {
            return Err(PrintifyError::MissingUploadId);
        }
        Ok(uploaded)
    }

    /// List all catalog blueprints
    pub async fn list_blueprints(&self) -> Result<Vec<Blueprint>, PrintifyError> {
        self.get_json("/catalog/blueprints.json").await
    }

    /// List print providers offering a blueprint
    pub async fn list_print_providers(
        &self,
        blueprint_id: u64,
    ) -> Result<Vec<PrintProvider>, PrintifyError> {
        self.get_json(&format!(
            "/catalog/blueprints/{}/print_providers.json",
            blueprint_id
        ))
        .await
    }

    /// List variants for a (blueprint, print provider) pair
    pub async fn list_variants(
        &self,
        blueprint_id: u64,
        print_provider_id: u64,
    ) -> Result<Vec<Variant>, PrintifyError> {
        let list: VariantList = self
            .get_json(&format!(
                "/catalog/blueprints/{}/print_providers/{}/variants.json",
                blueprint_id, print_provider_id
            ))
            .await?;
        Ok(list.variants)
    }

    /// List the account's shops
    pub async fn list_shops(&self) -> Result<Vec<Shop>, PrintifyError> {
        self.get_json("/shops.json").await
    }

    /// Create a product in a shop
    pub async fn create_product(
        &self,
        shop_id: u64,
        product: &serde_json::Value,
    ) -> Result<Product, PrintifyError> {
        self.post_json(&format!("/shops/{}/products.json", shop_id), product)
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PrintifyError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Printify GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, PrintifyError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Printify POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, PrintifyError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PrintifyError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

/// Derive an upload file name from the image URL's path component
pub(crate) fn derive_file_name(image_url: &str) -> Result<String, PrintifyError> {
    let url =
        Url::parse(image_url).map_err(|_| PrintifyError::InvalidImageUrl(image_url.to_string()))?;
    let name = url
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("design.png");
    Ok(name.to_string())
}
