// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Artifact deletion endpoint handler

use axum::extract::{Path, State};
use axum::Json;
use tracing::{info, warn};

use super::response::DeleteImageResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::storage::StoreError;

/// DELETE /api/v1/delete/{filename} - Remove a generated artifact
///
/// 404 if the filename is absent; 500 if the filesystem delete itself fails.
/// A delete losing a race to a concurrent delete reports 404.
pub async fn delete_image_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<DeleteImageResponse>, ApiError> {
    if !state.store.exists(&filename).await {
        return Err(ApiError::NotFound("Image not found".to_string()));
    }

    state.store.delete(&filename).await.map_err(|e| match e {
        StoreError::NotFound(_) => ApiError::NotFound("Image not found".to_string()),
        StoreError::Io(e) => {
            warn!("delete failed for {}: {}", filename, e);
            ApiError::Deletion(format!("Failed to delete image: {}", e))
        }
    })?;

    info!("deleted {}", filename);

    Ok(Json(DeleteImageResponse::deleted(&filename)))
}
