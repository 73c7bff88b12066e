// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod gemini;
pub mod storage;
pub mod version;

pub use config::{AppConfig, ALLOWED_EXTENSIONS};
pub use gemini::GeminiClient;
pub use storage::ImageStore;
