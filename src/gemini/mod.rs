// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation via the Google Gemini generateContent API

pub mod client;

pub use client::{GeminiClient, GenerateContentResponse, InlinePayload};
