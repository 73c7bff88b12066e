// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Directory-backed storage for generated artifacts

pub mod store;

pub use store::{ImageStore, StoreError};
