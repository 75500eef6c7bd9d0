// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! End-to-end pipeline tests with substituted stages

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

use fabstir_merch_node::colors::ColorCache;
use fabstir_merch_node::imagegen::ImageGenError;
use fabstir_merch_node::pipeline::{
    DesignPipeline, ImageGenerator, ProductCreator, PromptRefiner,
};
use fabstir_merch_node::printify::selection;
use fabstir_merch_node::printify::types::{
    PrintProduct, PrintifyError, ProductImage, Variant, VariantOptions,
};
use fabstir_merch_node::refinement::{RefinedDesign, RefinementError};

/// Refiner returning a canned design, recording the catalog it was given
struct CannedRefiner {
    design: RefinedDesign,
    seen_catalog: Mutex<Vec<String>>,
}

impl CannedRefiner {
    fn new(refined_prompt: &str, suggested_color: Option<&str>) -> Self {
        Self {
            design: RefinedDesign {
                refined_prompt: refined_prompt.to_string(),
                suggested_color: suggested_color.map(str::to_string),
            },
            seen_catalog: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PromptRefiner for CannedRefiner {
    async fn refine(
        &self,
        _user_prompt: &str,
        colors: &[String],
    ) -> Result<RefinedDesign, RefinementError> {
        *self.seen_catalog.lock().unwrap() = colors.to_vec();
        Ok(self.design.clone())
    }
}

struct CannedGenerator {
    url: String,
}

#[async_trait]
impl ImageGenerator for CannedGenerator {
    async fn generate(&self, _refined_prompt: &str) -> Result<String, ImageGenError> {
        Ok(self.url.clone())
    }
}

/// Creator that resolves variants with the real selection rules against a
/// fixed variant table and renders front/back mock-ups
struct CatalogCreator {
    variants: Vec<Variant>,
}

#[async_trait]
impl ProductCreator for CatalogCreator {
    async fn create_product(
        &self,
        _image_url: &str,
        _description: &str,
        suggested_color: Option<&str>,
    ) -> Result<PrintProduct, PrintifyError> {
        let variant = selection::resolve_variant(&self.variants, suggested_color).ok_or(
            PrintifyError::NoVariants {
                blueprint_id: 6,
                print_provider_id: 29,
            },
        )?;

        Ok(PrintProduct {
            id: "prod-42".to_string(),
            images: vec![
                ProductImage {
                    src: "https://mock.example/back.png".to_string(),
                    position: "back".to_string(),
                    is_default: false,
                },
                ProductImage {
                    src: "https://mock.example/front.png".to_string(),
                    position: "front".to_string(),
                    is_default: true,
                },
            ],
            selected_color: variant.options.color.clone(),
        })
    }
}

fn variant(id: u64, color: &str) -> Variant {
    Variant {
        id,
        options: VariantOptions {
            color: color.to_string(),
            size: None,
        },
    }
}

fn catalog_cache(colors: &[&str]) -> Arc<ColorCache> {
    let dir = tempdir().unwrap();
    let cache = ColorCache::new(dir.path().join("colors.json"));
    cache.replace(colors.iter().map(|c| c.to_string()).collect());
    Arc::new(cache)
}

#[tokio::test]
async fn test_fox_in_forest_scenario() {
    let refiner = Arc::new(CannedRefiner::new(
        "A minimalist fox silhouette among trees, transparent background.",
        Some("Forest Green"),
    ));
    let generator = Arc::new(CannedGenerator {
        url: "https://img.example/fox.png".to_string(),
    });
    let creator = Arc::new(CatalogCreator {
        variants: vec![variant(1, "Black"), variant(2, "Forest Green")],
    });
    let cache = catalog_cache(&["Black", "Forest Green"]);

    let pipeline = DesignPipeline::new(refiner.clone(), generator, creator, cache);
    let outcome = pipeline.run("a fox in a forest").await.unwrap();

    assert_eq!(outcome.original_prompt, "a fox in a forest");
    assert_eq!(
        outcome.refined_prompt,
        "A minimalist fox silhouette among trees, transparent background."
    );
    assert_eq!(outcome.suggested_color.as_deref(), Some("Forest Green"));
    assert_eq!(outcome.selected_color, "Forest Green");
    assert_eq!(outcome.generated_image_url, "https://img.example/fox.png");
    assert_eq!(
        outcome.mockup_url.as_deref(),
        Some("https://mock.example/front.png")
    );
    assert_eq!(outcome.product_id, "prod-42");

    // The refiner saw the catalog snapshot
    assert_eq!(
        *refiner.seen_catalog.lock().unwrap(),
        vec!["Black".to_string(), "Forest Green".to_string()]
    );
}

#[tokio::test]
async fn test_suggestion_matching_is_case_insensitive() {
    let refiner = Arc::new(CannedRefiner::new(
        "A wave pattern, transparent background.",
        Some("black"),
    ));
    let generator = Arc::new(CannedGenerator {
        url: "https://img.example/wave.png".to_string(),
    });
    let creator = Arc::new(CatalogCreator {
        variants: vec![variant(1, "Black"), variant(2, "White")],
    });
    let cache = catalog_cache(&["Black", "White"]);

    let pipeline = DesignPipeline::new(refiner, generator, creator, cache);
    let outcome = pipeline.run("waves").await.unwrap();

    assert_eq!(outcome.selected_color, "Black");
}

#[tokio::test]
async fn test_unknown_suggestion_falls_back_to_first_variant() {
    let refiner = Arc::new(CannedRefiner::new(
        "A wave pattern, transparent background.",
        Some("Neon Pink"),
    ));
    let generator = Arc::new(CannedGenerator {
        url: "https://img.example/wave.png".to_string(),
    });
    let creator = Arc::new(CatalogCreator {
        variants: vec![variant(1, "Black"), variant(2, "White")],
    });
    let cache = catalog_cache(&["Black", "White"]);

    let pipeline = DesignPipeline::new(refiner, generator, creator, cache);
    let outcome = pipeline.run("waves").await.unwrap();

    assert_eq!(outcome.selected_color, "Black");
}

#[tokio::test]
async fn test_no_suggestion_falls_back_to_first_variant() {
    let refiner = Arc::new(CannedRefiner::new(
        "A wave pattern, transparent background.",
        None,
    ));
    let generator = Arc::new(CannedGenerator {
        url: "https://img.example/wave.png".to_string(),
    });
    let creator = Arc::new(CatalogCreator {
        variants: vec![variant(7, "Heather Navy"), variant(8, "White")],
    });
    let cache = catalog_cache(&[]);

    let pipeline = DesignPipeline::new(refiner, generator, creator, cache);
    let outcome = pipeline.run("waves").await.unwrap();

    assert!(outcome.suggested_color.is_none());
    assert_eq!(outcome.selected_color, "Heather Navy");
}
