// Version information for the Fabstir Merch Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-tshirt-pipeline-2026-08-05";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-08-05";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "prompt-refinement",
    "image-generation",
    "printify-products",
    "color-catalog-cache",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Fabstir Merch Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
