// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Artifact download endpoint handler

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::storage::StoreError;

/// GET /api/v1/download/{filename} - Serve a generated artifact
///
/// Returns the stored bytes with a fixed PNG content type and permissive
/// CORS headers, or 404 if the filename is absent.
pub async fn download_image_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let bytes = state.store.read(&filename).await.map_err(|e| match e {
        StoreError::NotFound(_) => ApiError::NotFound("Image not found".to_string()),
        StoreError::Io(e) => ApiError::Internal(format!("Failed to read image: {}", e)),
    })?;

    debug!("serving {} ({} bytes)", filename, bytes.len());

    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string()),
        (header::ACCESS_CONTROL_ALLOW_METHODS, "GET".to_string()),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, "*".to_string()),
    ];

    Ok((headers, bytes).into_response())
}
