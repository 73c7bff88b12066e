// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Artifact deletion response types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteImageResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteImageResponse {
    pub fn deleted(filename: &str) -> Self {
        Self {
            success: true,
            message: format!("Image {} deleted successfully", filename),
        }
    }
}
