// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Artifact deletion endpoint module
//!
//! Provides DELETE /api/v1/delete/{filename}.

pub mod handler;
pub mod response;

pub use handler::delete_image_handler;
pub use response::DeleteImageResponse;
