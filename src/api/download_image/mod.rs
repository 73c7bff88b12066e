// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Artifact download endpoint module
//!
//! Provides GET /api/v1/download/{filename}.

pub mod handler;

pub use handler::download_image_handler;
