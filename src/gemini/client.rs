// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gemini generateContent client for image-to-image generation
//!
//! One synchronous round trip per request: send the uploaded image plus the
//! text prompt, take the first inline image payload from the first candidate.
//! No retry, no rate limiting, no batching.

use anyhow::{anyhow, bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Client for calling Gemini's generateContent endpoint
pub struct GeminiClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

// --- Wire types ---
//
// The REST API emits camelCase; the aliases also accept the snake_case shape
// some proxies produce.

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    #[serde(default, alias = "inlineData")]
    pub inline_data: Option<InlineData>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InlineData {
    #[serde(default, alias = "mimeType")]
    pub mime_type: Option<String>,
    pub data: InlinePayload,
}

/// Inline image payload as returned by the API. The data arrives either
/// base64-text-encoded or as raw bytes; both normalize to raw bytes, and any
/// other representation fails deserialization.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InlinePayload {
    Encoded(String),
    Raw(Vec<u8>),
}

impl InlinePayload {
    /// Normalize to raw image bytes.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            InlinePayload::Encoded(text) => STANDARD
                .decode(text.as_bytes())
                .context("invalid base64 in inline image payload"),
            InlinePayload::Raw(bytes) => Ok(bytes),
        }
    }
}

impl GeminiClient {
    /// Create a new GeminiClient against the production endpoint
    pub fn new(api_key: &str, model: &str) -> Result<Self> {
        Self::with_api_base(DEFAULT_API_BASE, api_key, model)
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_api_base(api_base: &str, api_key: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        let api_base = api_base.trim_end_matches('/').to_string();
        info!("Gemini client configured: base={}, model={}", api_base, model);

        Ok(Self {
            client,
            api_base,
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a new image from an input image and a text prompt.
    ///
    /// Returns the raw bytes of the generated image, already validated as a
    /// decodable image. The caller persists them.
    pub async fn generate(&self, image_bytes: &[u8], prompt: &str) -> Result<Vec<u8>> {
        // Local validation before the remote call
        image::load_from_memory(image_bytes)
            .map_err(|e| anyhow!("invalid input image: {}", e))?;
        let mime_type = guess_mime_type(image_bytes);

        let body = json!({
            "contents": [{
                "parts": [
                    {
                        "inline_data": {
                            "mime_type": mime_type,
                            "data": STANDARD.encode(image_bytes),
                        }
                    },
                    { "text": prompt },
                ]
            }]
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );
        debug!("Gemini generate POST {} (prompt_len={})", url, prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .context("Gemini API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            bail!("Gemini API returned {}: {}", status, text);
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .context("failed to decode Gemini API response")?;

        let generated = extract_inline_image(api_response)?;

        // The remote payload must itself be a decodable image
        image::load_from_memory(&generated)
            .map_err(|e| anyhow!("generated payload is not a valid image: {}", e))?;

        info!("Gemini generated {} bytes", generated.len());
        Ok(generated)
    }
}

/// Pull the first inline image payload out of the first candidate's parts,
/// normalized to raw bytes.
fn extract_inline_image(response: GenerateContentResponse) -> Result<Vec<u8>> {
    let payload = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| {
            content
                .parts
                .into_iter()
                .find_map(|part| part.inline_data)
        })
        .ok_or_else(|| anyhow!("no image data returned from API"))?;

    payload.data.into_bytes()
}

fn guess_mime_type(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::WebP) => "image/webp",
        // PNG and anything else the decoder accepted
        _ => "image/png",
    }
}
