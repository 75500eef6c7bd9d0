// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use dotenv::dotenv;
use fabstir_merch_node::{
    api::{start_server, AppState},
    colors::{spawn_refresh_task, ColorCache},
    config::AppConfig,
    imagegen::ImageGenClient,
    pipeline::DesignPipeline,
    printify::{PrintifyClient, ProductAssembler},
    refinement::RefinementClient,
};
use std::{env, sync::Arc, time::Duration};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Fabstir Merch Node...");
    println!("📦 {}", fabstir_merch_node::version::get_version_string());
    println!();

    let config = AppConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    // Provider clients
    let refiner = Arc::new(RefinementClient::new(
        config.openai.api_key.clone(),
        config.openai.model.clone(),
    ));
    let generator = Arc::new(ImageGenClient::new(
        config.replicate.api_token.clone(),
        config.replicate.model.clone(),
    ));
    let printify = Arc::new(PrintifyClient::new(config.printify.api_token.clone()));
    let assembler = Arc::new(ProductAssembler::new(printify.clone(), &config.printify));

    // Color catalog: serve the persisted copy immediately, refresh in the
    // background (first tick fires at startup)
    let color_cache = Arc::new(ColorCache::load(&config.colors_file));
    println!(
        "🎨 Color catalog: {} colors loaded from disk",
        color_cache.get().len()
    );

    let _refresh_task = spawn_refresh_task(
        printify.clone(),
        color_cache.clone(),
        config.printify.blueprint_id,
        config.printify.print_provider_id,
        Duration::from_secs(config.color_refresh_interval_secs),
    );

    let pipeline = Arc::new(DesignPipeline::new(
        refiner,
        generator,
        assembler,
        color_cache.clone(),
    ));

    let state = AppState {
        pipeline,
        color_cache,
    };

    start_server(state, config.api_port)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
