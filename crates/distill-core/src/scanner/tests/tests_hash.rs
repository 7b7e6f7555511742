//! Tests for the content-hash helper

#![allow(clippy::expect_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::scanner::compute_file_hash;

#[test]
fn test_hash_of_empty_file_is_the_known_sha256() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("empty.rs");
    fs::write(&path, b"").expect("Failed to write file");

    let hash = compute_file_hash(&path).expect("Failed to compute hash");

    assert_eq!(
        hash,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_hash_is_consistent_and_content_sensitive() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let a = temp_dir.path().join("a.rs");
    let b = temp_dir.path().join("b.rs");
    fs::write(&a, b"content A").expect("Failed to write file");
    fs::write(&b, b"content B").expect("Failed to write file");

    let hash_a1 = compute_file_hash(&a).expect("Failed to compute hash");
    let hash_a2 = compute_file_hash(&a).expect("Failed to compute hash");
    let hash_b = compute_file_hash(&b).expect("Failed to compute hash");

    assert_eq!(hash_a1, hash_a2);
    assert_ne!(hash_a1, hash_b);
    assert_eq!(hash_a1.len(), 64);
    assert!(hash_a1.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_hash_of_missing_file_is_an_error() {
    let result = compute_file_hash(Path::new("/nonexistent/path/to/file.rs"));

    assert!(result.is_err());
}
