// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Periodic color catalog refresh
//!
//! Walks the print provider's catalog (blueprint -> first provider ->
//! variants) and replaces the cached color list when it changed. Failures are
//! logged and leave the stale value in place; they never reach request
//! handlers.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::cache::ColorCache;
use crate::printify::client::PrintifyClient;
use crate::printify::product::resolve_print_target;
use crate::printify::selection;
use crate::printify::types::PrintifyError;

/// Default refresh interval: once a day
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Fetch the current color set from the print provider and store it.
///
/// `blueprint_override` / `provider_override` skip catalog discovery when
/// the target is pinned by configuration.
pub async fn refresh_colors(
    client: &PrintifyClient,
    cache: &ColorCache,
    blueprint_override: Option<u64>,
    provider_override: Option<u64>,
) -> Result<(), PrintifyError> {
    let (blueprint_id, print_provider_id) =
        resolve_print_target(client, blueprint_override, provider_override).await?;

    let variants = client.list_variants(blueprint_id, print_provider_id).await?;
    let colors = selection::distinct_colors(&variants);
    debug!(
        "Fetched {} distinct colors for blueprint {} at provider {}",
        colors.len(),
        blueprint_id,
        print_provider_id
    );

    cache.replace(colors);
    Ok(())
}

/// Spawn the periodic refresh task.
///
/// The first tick fires immediately, so the catalog is refreshed once at
/// startup and then on every interval.
pub fn spawn_refresh_task(
    client: Arc<PrintifyClient>,
    cache: Arc<ColorCache>,
    blueprint_override: Option<u64>,
    provider_override: Option<u64>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if let Err(e) =
                refresh_colors(&client, &cache, blueprint_override, provider_override).await
            {
                warn!("Color catalog refresh failed: {}", e);
            }
        }
    })
}
