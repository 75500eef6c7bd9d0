// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! The design request pipeline
//!
//! Composes the typed stages (refine -> generate -> create product) behind
//! trait seams so each boundary is checked by the compiler and each stage can
//! be substituted in tests.

pub mod runner;
pub mod stages;

pub use runner::{front_mockup_url, DesignOutcome, DesignPipeline, PipelineError};
pub use stages::{ImageGenerator, ProductCreator, PromptRefiner};
