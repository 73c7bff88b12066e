// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation response types

use serde::{Deserialize, Serialize};

/// Response from a successful generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    pub success: bool,
    pub message: String,
    /// URL the generated artifact can be downloaded from
    pub image_url: String,
    /// Filename of the generated artifact
    pub filename: String,
}

impl GenerateImageResponse {
    pub fn generated(image_url: String, filename: String) -> Self {
        Self {
            success: true,
            message: "Image generated successfully".to_string(),
            image_url,
            filename,
        }
    }
}
