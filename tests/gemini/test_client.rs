// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for GeminiClient against an in-process mock endpoint

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use fabstir_image_node::GeminiClient;
use serde_json::json;

/// A 1x1 PNG produced by the same decoder the client validates with
fn tiny_png() -> Vec<u8> {
    let img = image::DynamicImage::new_rgb8(1, 1);
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Serve a canned generateContent response on an ephemeral port
async fn spawn_mock(status: StatusCode, response: serde_json::Value) -> String {
    let app = Router::new().route(
        "/v1beta/models/:model",
        post(move || {
            let body = response.clone();
            async move { (status, Json(body)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_generate_returns_inline_payload_bytes() {
    let generated = tiny_png();
    let base = spawn_mock(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "inlineData": {
                            "mimeType": "image/png",
                            "data": STANDARD.encode(&generated),
                        }
                    }]
                }
            }]
        }),
    )
    .await;

    let client = GeminiClient::with_api_base(&base, "test-key", "test-model").unwrap();
    let result = client.generate(&tiny_png(), "add a hat").await.unwrap();
    assert_eq!(result, generated);
}

#[tokio::test]
async fn test_generate_accepts_raw_byte_payload() {
    let generated = tiny_png();
    let raw: Vec<serde_json::Value> = generated.iter().map(|b| json!(b)).collect();
    let base = spawn_mock(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "inline_data": { "mime_type": "image/png", "data": raw }
                    }]
                }
            }]
        }),
    )
    .await;

    let client = GeminiClient::with_api_base(&base, "test-key", "test-model").unwrap();
    let result = client.generate(&tiny_png(), "add a hat").await.unwrap();
    assert_eq!(result, generated);
}

#[tokio::test]
async fn test_generate_no_inline_payload_fails() {
    let base = spawn_mock(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": "I cannot generate that" }] }
            }]
        }),
    )
    .await;

    let client = GeminiClient::with_api_base(&base, "test-key", "test-model").unwrap();
    let err = client.generate(&tiny_png(), "add a hat").await.unwrap_err();
    assert!(err.to_string().contains("no image data returned"));
}

#[tokio::test]
async fn test_generate_api_error_is_surfaced() {
    let base = spawn_mock(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": { "message": "model overloaded" } }),
    )
    .await;

    let client = GeminiClient::with_api_base(&base, "test-key", "test-model").unwrap();
    let err = client.generate(&tiny_png(), "add a hat").await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Gemini API returned"), "got: {}", msg);
}

#[tokio::test]
async fn test_generate_garbled_payload_fails() {
    // Valid base64 that is not a decodable image
    let base = spawn_mock(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "inlineData": { "mimeType": "image/png", "data": STANDARD.encode(b"not an image") }
                    }]
                }
            }]
        }),
    )
    .await;

    let client = GeminiClient::with_api_base(&base, "test-key", "test-model").unwrap();
    let err = client.generate(&tiny_png(), "add a hat").await.unwrap_err();
    assert!(err.to_string().contains("not a valid image"));
}

#[tokio::test]
async fn test_generate_rejects_invalid_input_before_remote_call() {
    // Unreachable endpoint: if the input check did not run first, this would
    // fail with a connection error instead
    let client = GeminiClient::with_api_base("http://127.0.0.1:1", "test-key", "test-model").unwrap();
    let err = client.generate(b"definitely not an image", "prompt").await.unwrap_err();
    assert!(err.to_string().contains("invalid input image"));
}
