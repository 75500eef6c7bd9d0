// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Blueprint and variant selection rules

use std::collections::HashSet;

use super::types::{Blueprint, Variant};

/// Find the first blueprint whose title matches the t-shirt heuristic
/// ("t-shirt" or "tee" as a case-insensitive substring).
pub fn find_tshirt_blueprint(blueprints: &[Blueprint]) -> Option<&Blueprint> {
    blueprints.iter().find(|blueprint| {
        let title = blueprint.title.to_lowercase();
        title.contains("t-shirt") || title.contains("tee")
    })
}

/// Distinct variant colors, preserving first-seen order
pub fn distinct_colors(variants: &[Variant]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut colors = Vec::new();
    for variant in variants {
        if seen.insert(variant.options.color.clone()) {
            colors.push(variant.options.color.clone());
        }
    }
    colors
}

/// Resolve the variant to sell.
///
/// A non-empty suggestion is matched case-insensitively against the variant
/// colors; no suggestion or no match falls back to the first variant. Returns
/// `None` only when the variant list is empty.
pub fn resolve_variant<'a>(
    variants: &'a [Variant],
    suggested_color: Option<&str>,
) -> Option<&'a Variant> {
    if let Some(color) = suggested_color {
        let wanted = color.trim().to_lowercase();
        if !wanted.is_empty() {
            if let Some(variant) = variants
                .iter()
                .find(|v| v.options.color.to_lowercase() == wanted)
            {
                return Some(variant);
            }
        }
    }
    variants.first()
}
