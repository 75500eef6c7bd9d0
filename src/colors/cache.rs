// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! File-mirrored color catalog cache
//!
//! The catalog is held in process memory and replaced as a whole value, never
//! merged, so concurrent readers can never observe a partially updated
//! sequence. A JSON mirror on disk lets a restarted process serve stale data
//! until the next refresh completes.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info, warn};

/// In-memory color catalog with a JSON file mirror
pub struct ColorCache {
    colors: RwLock<Vec<String>>,
    file_path: PathBuf,
}

impl ColorCache {
    /// Create an empty cache that persists to `file_path`
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            colors: RwLock::new(Vec::new()),
            file_path: file_path.into(),
        }
    }

    /// Create a cache seeded from the persisted file.
    ///
    /// Any read or parse failure is non-fatal: the cache starts empty and the
    /// catalog is fetched from the print provider on the first refresh.
    pub fn load(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let colors = match fs::read_to_string(&file_path) {
            Ok(data) => match serde_json::from_str::<Vec<String>>(&data) {
                Ok(colors) => {
                    info!(
                        "Loaded {} t-shirt colors from {}",
                        colors.len(),
                        file_path.display()
                    );
                    colors
                }
                Err(e) => {
                    warn!(
                        "Could not parse color catalog file {}: {}",
                        file_path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(_) => {
                info!("No saved t-shirt colors; catalog will be fetched from the print provider");
                Vec::new()
            }
        };

        Self {
            colors: RwLock::new(colors),
            file_path,
        }
    }

    /// Snapshot of the current catalog; never blocks on network I/O
    pub fn get(&self) -> Vec<String> {
        self.colors
            .read()
            .map(|colors| colors.clone())
            .unwrap_or_default()
    }

    /// Path of the persisted mirror file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Replace the catalog if the new colors differ from the current ones.
    ///
    /// Comparison is order-independent: a provider-side reordering of the
    /// same color set leaves both memory and the file untouched. When the
    /// sets differ, the in-memory value is swapped wholesale and the mirror
    /// rewritten; a failed write is logged and the in-memory value kept.
    /// Returns whether a replacement happened.
    pub fn replace(&self, colors: Vec<String>) -> bool {
        {
            let current = match self.colors.read() {
                Ok(current) => current,
                Err(_) => return false,
            };
            if same_color_set(&current, &colors) {
                debug!("T-shirt colors unchanged, no update needed");
                return false;
            }
        }

        if let Ok(mut guard) = self.colors.write() {
            *guard = colors.clone();
        }

        match self.persist(&colors) {
            Ok(()) => info!("T-shirt colors updated and saved ({} colors)", colors.len()),
            Err(e) => warn!(
                "Failed to persist color catalog to {}: {}",
                self.file_path.display(),
                e
            ),
        }

        true
    }

    fn persist(&self, colors: &[String]) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(colors)?;
        fs::write(&self.file_path, data)
    }
}

/// Order-independent equality of two color sequences
fn same_color_set(a: &[String], b: &[String]) -> bool {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    set_a == set_b
}
