// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Product assembly
//!
//! Turns a generated design image into a sellable listing: upload the image,
//! resolve a (blueprint, provider, variant) combination for the suggested
//! color, and create the product. Every catalog lookup is refetched per
//! invocation; provider catalogs are not under our control.

use std::sync::Arc;
use tracing::{debug, info};

use super::client::PrintifyClient;
use super::selection;
use super::types::{PrintProduct, PrintifyError, VariantSelection};
use crate::config::PrintifyConfig;

/// Fixed listing title for created products
const PRODUCT_TITLE: &str = "Custom T-Shirt Design";

/// Listing price in cents
const PRODUCT_PRICE_CENTS: u32 = 2000;

/// Assembles print products from generated design images
pub struct ProductAssembler {
    client: Arc<PrintifyClient>,
    shop_id: Option<u64>,
    blueprint_id: Option<u64>,
    print_provider_id: Option<u64>,
}

impl ProductAssembler {
    /// Create an assembler; `None` config ids mean dynamic discovery
    pub fn new(client: Arc<PrintifyClient>, config: &PrintifyConfig) -> Self {
        Self {
            client,
            shop_id: config.shop_id,
            blueprint_id: config.blueprint_id,
            print_provider_id: config.print_provider_id,
        }
    }

    /// Create a product listing for a generated design.
    ///
    /// Any step's failure aborts the whole operation; completed steps (the
    /// image upload in particular) are not rolled back.
    pub async fn create_product(
        &self,
        image_url: &str,
        description: &str,
        suggested_color: Option<&str>,
    ) -> Result<PrintProduct, PrintifyError> {
        info!("Uploading design image to Printify");
        let uploaded = self.client.upload_image(image_url).await?;
        debug!("Image uploaded, id={}", uploaded.id);

        let (blueprint_id, print_provider_id) =
            resolve_print_target(&self.client, self.blueprint_id, self.print_provider_id).await?;

        let variants = self
            .client
            .list_variants(blueprint_id, print_provider_id)
            .await?;
        let variant = selection::resolve_variant(&variants, suggested_color).ok_or(
            PrintifyError::NoVariants {
                blueprint_id,
                print_provider_id,
            },
        )?;
        let selected_color = variant.options.color.clone();
        let variant_selection = VariantSelection {
            blueprint_id,
            print_provider_id,
            variant_id: variant.id,
        };
        debug!(
            "Resolved variant {} (color {}) for blueprint {} at provider {}",
            variant_selection.variant_id, selected_color, blueprint_id, print_provider_id
        );

        let payload = build_product_payload(&variant_selection, &uploaded.id, description);

        let shop_id = match self.shop_id {
            Some(id) => id,
            None => {
                let shops = self.client.list_shops().await?;
                shops.first().ok_or(PrintifyError::NoShops)?.id
            }
        };

        let product = self.client.create_product(shop_id, &payload).await?;
        if product.id.is_empty() {
            return Err(PrintifyError::MissingProductId);
        }

        info!(
            "Printify product created: id={}, color={}",
            product.id, selected_color
        );

        Ok(PrintProduct {
            id: product.id,
            images: product.images,
            selected_color,
        })
    }
}

/// Resolve the blueprint and print provider to sell through.
///
/// Configured ids short-circuit discovery; otherwise the catalog is scanned
/// for a t-shirt blueprint and its first listed provider is taken.
pub async fn resolve_print_target(
    client: &PrintifyClient,
    blueprint_override: Option<u64>,
    provider_override: Option<u64>,
) -> Result<(u64, u64), PrintifyError> {
    let blueprint_id = match blueprint_override {
        Some(id) => id,
        None => {
            let blueprints = client.list_blueprints().await?;
            let blueprint = selection::find_tshirt_blueprint(&blueprints)
                .ok_or(PrintifyError::NoTshirtBlueprint)?;
            debug!(
                "T-shirt blueprint found: {} (id {})",
                blueprint.title, blueprint.id
            );
            blueprint.id
        }
    };

    let print_provider_id = match provider_override {
        Some(id) => id,
        None => {
            let providers = client.list_print_providers(blueprint_id).await?;
            providers
                .first()
                .ok_or(PrintifyError::NoPrintProviders { blueprint_id })?
                .id
        }
    };

    Ok((blueprint_id, print_provider_id))
}

/// Build the product-create payload: a single enabled variant with one
/// front-placed print area, the design centered at neutral scale/rotation.
fn build_product_payload(
    selection: &VariantSelection,
    image_id: &str,
    description: &str,
) -> serde_json::Value {
    serde_json::json!({
        "title": PRODUCT_TITLE,
        "description": description,
        "blueprint_id": selection.blueprint_id,
        "print_provider_id": selection.print_provider_id,
        "variants": [
            {
                "id": selection.variant_id,
                "price": PRODUCT_PRICE_CENTS,
                "is_enabled": true
            }
        ],
        "print_areas": [
            {
                "variant_ids": [selection.variant_id],
                "placeholders": [
                    {
                        "position": "front",
                        "images": [
                            {
                                "id": image_id,
                                "x": 0.5,
                                "y": 0.5,
                                "scale": 1,
                                "angle": 0
                            }
                        ]
                    }
                ]
            }
        ]
    })
}
