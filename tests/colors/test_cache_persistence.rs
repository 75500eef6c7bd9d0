// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Color catalog persistence across process restarts

use std::fs;
use tempfile::tempdir;

use fabstir_merch_node::colors::ColorCache;

fn colors(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_catalog_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tshirtColors.json");

    {
        let cache = ColorCache::new(&path);
        cache.replace(colors(&["Black", "White", "Forest Green"]));
    }

    // A restarted process serves the stale catalog before any refresh
    let reloaded = ColorCache::load(&path);
    assert_eq!(reloaded.get(), colors(&["Black", "White", "Forest Green"]));
}

#[test]
fn test_refresh_with_same_set_leaves_mirror_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tshirtColors.json");
    let cache = ColorCache::new(&path);
    cache.replace(colors(&["Black", "White"]));

    fs::write(&path, "sentinel").unwrap();

    // Same set in a different order: no rewrite
    assert!(!cache.replace(colors(&["White", "Black"])));
    assert_eq!(fs::read_to_string(&path).unwrap(), "sentinel");
}

#[test]
fn test_refresh_with_new_set_updates_memory_and_mirror() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tshirtColors.json");
    let cache = ColorCache::new(&path);
    cache.replace(colors(&["Black"]));

    assert!(cache.replace(colors(&["Black", "Heather Navy"])));
    assert_eq!(cache.get(), colors(&["Black", "Heather Navy"]));

    let persisted: Vec<String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(persisted, colors(&["Black", "Heather Navy"]));
}

#[test]
fn test_missing_file_yields_empty_catalog() {
    let dir = tempdir().unwrap();
    let cache = ColorCache::load(dir.path().join("nope.json"));
    assert!(cache.get().is_empty());
}
