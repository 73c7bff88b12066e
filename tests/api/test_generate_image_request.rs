// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for upload validation on the generate endpoint

use bytes::Bytes;
use fabstir_image_node::api::generate_image::GenerationUpload;

const TEN_MB: usize = 10 * 1024 * 1024;

fn upload(filename: &str, size: usize) -> GenerationUpload {
    GenerationUpload {
        filename: filename.to_string(),
        image: Bytes::from(vec![0u8; size]),
        prompt: "add a hat".to_string(),
    }
}

#[test]
fn test_allowed_extensions_pass() {
    for name in ["cat.png", "cat.jpg", "cat.jpeg", "cat.webp"] {
        assert!(upload(name, 4096).validate(TEN_MB).is_ok(), "{} rejected", name);
    }
}

#[test]
fn test_extension_check_is_case_insensitive() {
    for name in ["cat.PNG", "photo.JPEG", "img.WebP"] {
        assert!(upload(name, 4096).validate(TEN_MB).is_ok(), "{} rejected", name);
    }
}

#[test]
fn test_disallowed_extension_lists_allowed_set() {
    let err = upload("cat.txt", 4096).validate(TEN_MB).unwrap_err();
    let detail = err.detail().to_string();
    assert!(detail.contains("Invalid file extension"));
    assert!(detail.contains("jpg, jpeg, png, webp"));
}

#[test]
fn test_missing_extension_rejected() {
    assert!(upload("cat", 4096).validate(TEN_MB).is_err());
    assert!(upload("", 4096).validate(TEN_MB).is_err());
}

#[test]
fn test_only_final_dot_segment_counts() {
    // "cat.png.txt" ends in txt, not png
    assert!(upload("cat.png.txt", 4096).validate(TEN_MB).is_err());
    assert!(upload("archive.tar.png", 4096).validate(TEN_MB).is_ok());
}

#[test]
fn test_oversize_upload_cites_byte_limit() {
    let err = upload("cat.png", 2048).validate(1024).unwrap_err();
    let detail = err.detail().to_string();
    assert!(detail.contains("exceeds maximum allowed size"));
    assert!(detail.contains("1024"));
}

#[test]
fn test_upload_at_limit_passes() {
    assert!(upload("cat.png", 1024).validate(1024).is_ok());
}

#[test]
fn test_validation_errors_map_to_400() {
    let err = upload("cat.txt", 4096).validate(TEN_MB).unwrap_err();
    assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
}
