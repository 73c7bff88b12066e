// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint module
//!
//! Provides POST /api/v1/generate-image for image-plus-prompt generation.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_image_handler;
pub use request::GenerationUpload;
pub use response::GenerateImageResponse;
