// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use fabstir_image_node::api::{start_server, AppState};
use fabstir_image_node::{AppConfig, GeminiClient, ImageStore};
use std::env;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    if config.google_api_key.is_empty() {
        warn!("GOOGLE_API_KEY is not set; generation requests will fail");
    }

    // Output and upload directories exist for the lifetime of the process
    let store = ImageStore::new(&config.output_dir)?;
    std::fs::create_dir_all(&config.upload_dir)?;

    let generator = GeminiClient::new(&config.google_api_key, &config.gemini_model)?;

    info!(
        "starting image node: model={}, output_dir={}, max_upload={} bytes",
        config.gemini_model,
        config.output_dir.display(),
        config.max_image_size
    );

    let state = AppState {
        config: Arc::new(config),
        generator: Arc::new(generator),
        store: Arc::new(store),
    };

    start_server(state).await
}
