// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Failure short-circuit tests: a failed stage aborts the run and later
//! stages are never invoked

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::tempdir;

use fabstir_merch_node::colors::ColorCache;
use fabstir_merch_node::imagegen::ImageGenError;
use fabstir_merch_node::pipeline::{
    DesignPipeline, ImageGenerator, PipelineError, ProductCreator, PromptRefiner,
};
use fabstir_merch_node::printify::types::{PrintProduct, PrintifyError};
use fabstir_merch_node::refinement::{RefinedDesign, RefinementError};

struct FailingRefiner;

#[async_trait]
impl PromptRefiner for FailingRefiner {
    async fn refine(
        &self,
        _user_prompt: &str,
        _colors: &[String],
    ) -> Result<RefinedDesign, RefinementError> {
        Err(RefinementError::Api {
            status: 500,
            message: r#"{"error":{"message":"upstream exploded"}}"#.to_string(),
        })
    }
}

struct OkRefiner;

#[async_trait]
impl PromptRefiner for OkRefiner {
    async fn refine(
        &self,
        _user_prompt: &str,
        _colors: &[String],
    ) -> Result<RefinedDesign, RefinementError> {
        Ok(RefinedDesign {
            refined_prompt: "A fox, transparent background.".to_string(),
            suggested_color: None,
        })
    }
}

struct CountingGenerator {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl ImageGenerator for CountingGenerator {
    async fn generate(&self, _refined_prompt: &str) -> Result<String, ImageGenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(ImageGenError::EmptyOutput)
        } else {
            Ok("https://img.example/fox.png".to_string())
        }
    }
}

struct CountingCreator {
    calls: AtomicUsize,
}

#[async_trait]
impl ProductCreator for CountingCreator {
    async fn create_product(
        &self,
        _image_url: &str,
        _description: &str,
        _suggested_color: Option<&str>,
    ) -> Result<PrintProduct, PrintifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(PrintProduct {
            id: "prod-1".to_string(),
            images: vec![],
            selected_color: "Black".to_string(),
        })
    }
}

fn empty_cache() -> Arc<ColorCache> {
    let dir = tempdir().unwrap();
    Arc::new(ColorCache::new(dir.path().join("colors.json")))
}

#[tokio::test]
async fn test_refiner_failure_stops_pipeline_before_generation() {
    let generator = Arc::new(CountingGenerator {
        calls: AtomicUsize::new(0),
        fail: false,
    });
    let creator = Arc::new(CountingCreator {
        calls: AtomicUsize::new(0),
    });

    let pipeline = DesignPipeline::new(
        Arc::new(FailingRefiner),
        generator.clone(),
        creator.clone(),
        empty_cache(),
    );

    let err = pipeline.run("a fox in a forest").await.unwrap_err();
    assert!(matches!(err, PipelineError::Refinement(_)));
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    assert_eq!(creator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generator_failure_stops_pipeline_before_product_creation() {
    let generator = Arc::new(CountingGenerator {
        calls: AtomicUsize::new(0),
        fail: true,
    });
    let creator = Arc::new(CountingCreator {
        calls: AtomicUsize::new(0),
    });

    let pipeline = DesignPipeline::new(
        Arc::new(OkRefiner),
        generator.clone(),
        creator.clone(),
        empty_cache(),
    );

    let err = pipeline.run("a fox in a forest").await.unwrap_err();
    assert!(matches!(err, PipelineError::ImageGeneration(_)));
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    assert_eq!(creator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_upstream_payload_survives_to_the_error() {
    let pipeline = DesignPipeline::new(
        Arc::new(FailingRefiner),
        Arc::new(CountingGenerator {
            calls: AtomicUsize::new(0),
            fail: false,
        }),
        Arc::new(CountingCreator {
            calls: AtomicUsize::new(0),
        }),
        empty_cache(),
    );

    let err = pipeline.run("a fox").await.unwrap_err();
    let details = err.upstream_details().unwrap();
    assert_eq!(details["error"]["message"], "upstream exploded");
}
