// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Filesystem store keyed by artifact filename
//!
//! Values are image byte streams under a single output directory. The store
//! never escapes its root: any filename with a path separator or a
//! parent-directory segment resolves to `NotFound`.

use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub struct ImageStore {
    output_dir: PathBuf,
}

impl ImageStore {
    /// Open a store rooted at `output_dir`, creating the directory if absent.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Resolve a filename against the store root. Rejects anything that is
    /// not a plain file name.
    fn resolve(&self, filename: &str) -> Result<PathBuf, StoreError> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename == "."
            || filename == ".."
        {
            return Err(StoreError::NotFound(filename.to_string()));
        }
        Ok(self.output_dir.join(filename))
    }

    /// Persist generated bytes under a fresh timestamp-derived filename of
    /// the form `generated_<%Y%m%d_%H%M%S>.png`, returning the filename.
    ///
    /// Concurrent generations within the same wall-clock second contend for
    /// the same base name, so the name is reserved by creating the file with
    /// `create_new`; losers of that race move on to the next numeric suffix.
    /// No two callers can ever be handed the same filename.
    pub async fn write_generated(&self, bytes: &[u8]) -> Result<String, StoreError> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        self.create_unique(&format!("generated_{}", stamp), bytes)
            .await
    }

    /// Atomically claim `<stem>.png` (or `<stem>_1.png`, `<stem>_2.png`, ...)
    /// and write `bytes` into it.
    async fn create_unique(&self, stem: &str, bytes: &[u8]) -> Result<String, StoreError> {
        let mut n = 0u32;
        loop {
            let name = if n == 0 {
                format!("{}.png", stem)
            } else {
                format!("{}_{}.png", stem, n)
            };
            let path = self.output_dir.join(&name);

            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(mut file) => {
                    file.write_all(bytes).await?;
                    file.flush().await?;
                    debug!("wrote artifact {} ({} bytes)", path.display(), bytes.len());
                    return Ok(name);
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => n += 1,
                Err(e) => return Err(StoreError::Io(e)),
            }
        }
    }

    /// Write an artifact under an explicit filename, returning its full path.
    pub async fn write(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let path = self.resolve(filename)?;
        tokio::fs::write(&path, bytes).await?;
        debug!("wrote artifact {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    /// Read an artifact back. A missing file is `NotFound`, never an I/O error.
    pub async fn read(&self, filename: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(filename)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(filename.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Delete an artifact. A concurrent delete losing the race reports
    /// `NotFound` rather than an error.
    pub async fn delete(&self, filename: &str) -> Result<(), StoreError> {
        let path = self.resolve(filename)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!("deleted artifact {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(filename.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    pub async fn exists(&self, filename: &str) -> bool {
        match self.resolve(filename) {
            Ok(path) => tokio::fs::try_exists(&path).await.unwrap_or(false),
            Err(_) => false,
        }
    }
}
