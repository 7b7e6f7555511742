//! Tests for the info command

#![allow(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::commands::info::run;

#[test]
fn test_info_runs_over_a_small_tree() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("app.py"), "import flask\n\ndef index():\n    pass\n")
        .expect("Failed to write file");

    run(temp_dir.path(), 3).expect("info command");
}

#[test]
fn test_info_fails_on_missing_root() {
    let result = run(&PathBuf::from("/nonexistent_directory_xyz"), 3);

    assert!(result.is_err());
}
