// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP API surface: validation, routing, and response mapping

pub mod delete_image;
pub mod download_image;
pub mod errors;
pub mod generate_image;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{build_router, start_server, AppState};
