// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Application configuration, read once at startup from the environment.
//!
//! The struct is constructed in `main` and shared through `AppState`;
//! nothing mutates it after process start.

use std::env;
use std::path::PathBuf;

/// Upload extensions accepted by the generate endpoint. Compiled-in,
/// not environment-configurable.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,

    /// API key for the Gemini generateContent endpoint
    pub google_api_key: String,
    /// Gemini model identifier
    pub gemini_model: String,

    /// Maximum accepted upload size in bytes
    pub max_image_size: usize,
    /// Directory generated artifacts are written to
    pub output_dir: PathBuf,
    /// Directory reserved for raw uploads; created at startup
    pub upload_dir: PathBuf,
    /// Directory the landing page and assets are served from
    pub static_dir: PathBuf,

    /// Allowed CORS origins; `*` means any
    pub allowed_origins: Vec<String>,
    /// Optional path prefix when running behind a reverse proxy
    pub root_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8010,
            debug: false,
            google_api_key: String::new(),
            gemini_model: "gemini-2.5-flash-image".to_string(),
            max_image_size: 10 * 1024 * 1024,
            output_dir: PathBuf::from("outputs"),
            upload_dir: PathBuf::from("uploads"),
            static_dir: PathBuf::from("static"),
            allowed_origins: vec!["*".to_string()],
            root_path: String::new(),
        }
    }
}

impl AppConfig {
    /// Build a config from environment variables, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);
        let debug = env::var("DEBUG")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(defaults.debug);

        let google_api_key = env::var("GOOGLE_API_KEY").unwrap_or_default();
        let gemini_model = env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model);

        let max_image_size = env::var("MAX_IMAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_image_size);

        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.upload_dir);
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        let root_path = env::var("ROOT_PATH").unwrap_or(defaults.root_path);

        AppConfig {
            host,
            port,
            debug,
            google_api_key,
            gemini_model,
            max_image_size,
            output_dir,
            upload_dir,
            static_dir,
            allowed_origins,
            root_path,
        }
    }

    /// Whether any origin is allowed for CORS
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}
