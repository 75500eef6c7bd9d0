// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! T-shirt color catalog
//!
//! The set of garment colors currently offered by the print provider, cached
//! in memory, mirrored to a local file, and refreshed on a timer.

pub mod cache;
pub mod refresher;

pub use cache::ColorCache;
pub use refresher::{refresh_colors, spawn_refresh_task, DEFAULT_REFRESH_INTERVAL_SECS};
