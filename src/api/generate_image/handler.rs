// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint handler

use axum::extract::{Host, Multipart, State};
use axum::Json;
use tracing::{debug, info, warn};

use super::request::GenerationUpload;
use super::response::GenerateImageResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /api/v1/generate-image - Generate a new image from an upload + prompt
///
/// Pipeline:
/// 1. Extract the multipart fields
/// 2. Validate extension and size (400 on violation, before any remote call)
/// 3. Call the Gemini client
/// 4. Persist the result under a timestamp-derived filename
/// 5. Return the download URL and filename
pub async fn generate_image_handler(
    State(state): State<AppState>,
    Host(host): Host,
    multipart: Multipart,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    let upload = GenerationUpload::from_multipart(multipart).await?;

    debug!(
        "generation request: file={}, {} bytes, prompt_len={}",
        upload.filename,
        upload.image.len(),
        upload.prompt.len()
    );

    if let Err(e) = upload.validate(state.config.max_image_size) {
        warn!("upload rejected: {}", e);
        return Err(e);
    }

    let generated = state
        .generator
        .generate(&upload.image, &upload.prompt)
        .await
        .map_err(|e| {
            warn!("generation failed: {:#}", e);
            ApiError::Generation(format!("Image generation failed: {}", e))
        })?;

    let filename = state
        .store
        .write_generated(&generated)
        .await
        .map_err(|e| ApiError::Generation(format!("Image generation failed: {}", e)))?;

    let image_url = format!(
        "http://{}{}/api/v1/download/{}",
        host, state.config.root_path, filename
    );

    info!("generated {} ({} bytes)", filename, generated.len());

    Ok(Json(GenerateImageResponse::generated(image_url, filename)))
}
