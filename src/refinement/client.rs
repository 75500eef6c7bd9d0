// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat-completion client for prompt refinement

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use super::parser;
use super::types::{ensure_transparent_background, RefinedDesign, RefinementError};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

const MAX_COMPLETION_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

/// Client for refining raw user prompts into print-ready design descriptions
pub struct RefinementClient {
    api_key: String,
    model: String,
    client: Client,
}

impl RefinementClient {
    /// Create a new refinement client
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            model,
            client,
        }
    }

    /// Refine a user prompt against the current color catalog.
    ///
    /// The reply is parsed with the two-line grammar in [`parser`]; the
    /// transparent-background mention is enforced on the result.
    pub async fn refine(
        &self,
        user_prompt: &str,
        colors: &[String],
    ) -> Result<RefinedDesign, RefinementError> {
        let instruction = build_instruction(user_prompt, colors);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": instruction }],
            "max_tokens": MAX_COMPLETION_TOKENS,
            "temperature": TEMPERATURE,
        });

        debug!("Refinement POST {} (model={})", OPENAI_API_URL, self.model);

        let response = self
            .client
            .post(OPENAI_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RefinementError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let output = completion
            .choices
            .into_iter()
            .next()
            .ok_or(RefinementError::EmptyCompletion)?
            .message
            .content;

        let reply = parser::parse_reply(&output)?;
        let refined_prompt = ensure_transparent_background(reply.refined_prompt);
        let suggested_color = Some(reply.suggested_color).filter(|color| !color.is_empty());

        info!(
            "Prompt refined ({} chars), suggested color: {:?}",
            refined_prompt.len(),
            suggested_color
        );

        Ok(RefinedDesign {
            refined_prompt,
            suggested_color,
        })
    }
}

/// Build the refinement instruction embedding the color catalog
fn build_instruction(user_prompt: &str, colors: &[String]) -> String {
    format!(
        "Refine the following t-shirt design prompt to create a beautiful, luxurious, \
         elegant, and vivid design suitable for printing on a t-shirt. The design should \
         have a transparent background so it can be easily applied to different colored \
         t-shirts. Expand on the user's ideas while keeping the essence of their concept. \
         The refined prompt should be under 1000 characters and should explicitly mention \
         the need for a transparent background. Also, suggest a t-shirt color from the \
         available options that would best complement the design.\n\n\
         Available t-shirt colors: {}\n\n\
         User's prompt: \"{}\"\n\n\
         Output your response in the following format:\n\
         1. Refined Design Prompt: [Your refined prompt here, including a mention of transparent background]\n\
         2. Suggested T-shirt Color: [Your color suggestion here, must be one of the available colors]",
        colors.join(", "),
        user_prompt
    )
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}
