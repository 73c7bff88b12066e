// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upload extraction and validation for the generate endpoint

use axum::extract::Multipart;
use bytes::Bytes;

use crate::api::errors::ApiError;
use crate::config::ALLOWED_EXTENSIONS;

/// The two multipart fields accepted by POST /api/v1/generate-image
#[derive(Debug, Clone)]
pub struct GenerationUpload {
    /// Original filename of the uploaded image
    pub filename: String,
    /// Raw uploaded bytes
    pub image: Bytes,
    /// Text prompt describing the desired output
    pub prompt: String,
}

impl GenerationUpload {
    /// Pull `image` and `prompt` out of a multipart form. Unknown fields are
    /// ignored; missing fields are a validation error.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut filename = None;
        let mut image = None;
        let mut prompt = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::Validation(format!("malformed multipart body: {}", e)))?
        {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("image") => {
                    filename = field.file_name().map(str::to_string);
                    image = Some(field.bytes().await.map_err(|e| {
                        ApiError::Validation(format!("failed to read image field: {}", e))
                    })?);
                }
                Some("prompt") => {
                    prompt = Some(field.text().await.map_err(|e| {
                        ApiError::Validation(format!("failed to read prompt field: {}", e))
                    })?);
                }
                _ => {}
            }
        }

        let image =
            image.ok_or_else(|| ApiError::Validation("missing 'image' field".to_string()))?;
        let filename =
            filename.ok_or_else(|| ApiError::Validation("image field has no filename".to_string()))?;
        let prompt =
            prompt.ok_or_else(|| ApiError::Validation("missing 'prompt' field".to_string()))?;

        Ok(Self {
            filename,
            image,
            prompt,
        })
    }

    /// Validate extension and size against the configured limits. Runs before
    /// any external call.
    pub fn validate(&self, max_image_size: usize) -> Result<(), ApiError> {
        let extension = self
            .filename
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ApiError::Validation(format!(
                "Invalid file extension. Allowed: {}",
                ALLOWED_EXTENSIONS.join(", ")
            )));
        }

        if self.image.len() > max_image_size {
            return Err(ApiError::Validation(format!(
                "File size exceeds maximum allowed size of {} bytes",
                max_image_size
            )));
        }

        Ok(())
    }
}
