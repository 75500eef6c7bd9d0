// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration loaded from environment variables

use std::env;
use std::path::PathBuf;

/// Top-level configuration for the merch node
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP API listens on
    pub api_port: u16,
    /// Language-model provider settings
    pub openai: OpenAiConfig,
    /// Image-generation provider settings
    pub replicate: ReplicateConfig,
    /// Print-on-demand provider settings
    pub printify: PrintifyConfig,
    /// Path of the persisted color catalog file
    pub colors_file: PathBuf,
    /// Seconds between color catalog refreshes
    pub color_refresh_interval_secs: u64,
}

/// Language-model provider settings
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for the chat-completion endpoint
    pub api_key: String,
    /// Model used for prompt refinement
    pub model: String,
}

/// Image-generation provider settings
#[derive(Debug, Clone)]
pub struct ReplicateConfig {
    /// API token for the predictions endpoint
    pub api_token: String,
    /// Model identifier (owner/name)
    pub model: String,
}

/// Print-on-demand provider settings
#[derive(Debug, Clone)]
pub struct PrintifyConfig {
    /// Bearer token for the Printify REST API
    pub api_token: String,
    /// Target shop; discovered from the shop list when absent
    pub shop_id: Option<u64>,
    /// Fixed blueprint; discovered by title heuristic when absent
    pub blueprint_id: Option<u64>,
    /// Fixed print provider; first listed is used when absent
    pub print_provider_id: Option<u64>,
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            openai: OpenAiConfig {
                api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            },
            replicate: ReplicateConfig {
                api_token: env::var("REPLICATE_API_TOKEN").unwrap_or_default(),
                model: env::var("REPLICATE_MODEL")
                    .unwrap_or_else(|_| "black-forest-labs/flux-dev".to_string()),
            },
            printify: PrintifyConfig {
                api_token: env::var("PRINTIFY_API_TOKEN").unwrap_or_default(),
                shop_id: env_u64("PRINTIFY_SHOP_ID"),
                blueprint_id: env_u64("PRINTIFY_BLUEPRINT_ID"),
                print_provider_id: env_u64("PRINTIFY_PRINT_PROVIDER_ID"),
            },
            colors_file: env::var("TSHIRT_COLORS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./tshirtColors.json")),
            color_refresh_interval_secs: env_u64("COLOR_REFRESH_INTERVAL_SECS").unwrap_or(86_400),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.openai.api_key.is_empty() {
            return Err("OPENAI_API_KEY is not set".to_string());
        }
        if self.replicate.api_token.is_empty() {
            return Err("REPLICATE_API_TOKEN is not set".to_string());
        }
        if self.printify.api_token.is_empty() {
            return Err("PRINTIFY_API_TOKEN is not set".to_string());
        }
        if self.color_refresh_interval_secs == 0 {
            return Err("Color refresh interval must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_port: 3001,
            openai: OpenAiConfig {
                api_key: String::new(),
                model: "gpt-4o".to_string(),
            },
            replicate: ReplicateConfig {
                api_token: String::new(),
                model: "black-forest-labs/flux-dev".to_string(),
            },
            printify: PrintifyConfig {
                api_token: String::new(),
                shop_id: None,
                blueprint_id: None,
                print_provider_id: None,
            },
            colors_file: PathBuf::from("./tshirtColors.json"),
            color_refresh_interval_secs: 86_400,
        }
    }
}
