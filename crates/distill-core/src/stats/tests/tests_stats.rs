//! Tests for result statistics

#![allow(clippy::expect_used)]

use std::fs;

use tempfile::TempDir;

use crate::config::ScanConfig;
use crate::scanner::{scan_directory, Language};
use crate::stats::{detect_project, file_tree, file_type_histogram, largest_files};

fn scan_fixture() -> (TempDir, crate::model::ScanResult) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let app = temp_dir.path().join("app");
    fs::create_dir(&app).expect("Failed to create dir");
    fs::write(
        app.join("views.py"),
        "import django\n\ndef index(request):\n    return render(request)\n",
    )
    .expect("Failed to write file");
    fs::write(
        app.join("models.py"),
        "import django\n\nclass User:\n    pass\n",
    )
    .expect("Failed to write file");
    fs::write(temp_dir.path().join("main.rs"), "use tokio::main;\n\nfn main() {}\n")
        .expect("Failed to write file");

    let result = scan_directory(temp_dir.path(), &ScanConfig::default()).expect("scan");
    (temp_dir, result)
}

#[test]
fn test_histogram_counts_records_per_language() {
    let (_guard, result) = scan_fixture();

    let histogram = file_type_histogram(&result);

    assert_eq!(histogram.get(&Language::Python), Some(&2));
    assert_eq!(histogram.get(&Language::Rust), Some(&1));
    assert_eq!(histogram.get(&Language::JavaScript), None);
}

#[test]
fn test_largest_files_sorts_by_line_count() {
    let (_guard, result) = scan_fixture();

    let largest = largest_files(&result, 2);

    assert_eq!(largest.len(), 2);
    assert!(largest[0].line_count >= largest[1].line_count);
}

#[test]
fn test_largest_files_caps_at_record_count() {
    let (_guard, result) = scan_fixture();

    let largest = largest_files(&result, 50);

    assert_eq!(largest.len(), result.records.len());
}

#[test]
fn test_project_detection_finds_language_and_frameworks() {
    let (_guard, result) = scan_fixture();

    let info = detect_project(&result);

    assert_eq!(info.primary_language, Some(Language::Python));
    assert!(info.frameworks.contains(&"Django".to_string()));
    assert!(info.frameworks.contains(&"Tokio".to_string()));
}

#[test]
fn test_empty_scan_has_no_project_info() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = scan_directory(temp_dir.path(), &ScanConfig::default()).expect("scan");

    let info = detect_project(&result);

    assert_eq!(info.primary_language, None);
    assert!(info.languages.is_empty());
    assert!(info.frameworks.is_empty());
}

#[test]
fn test_file_tree_renders_directories_and_files() {
    let (_guard, result) = scan_fixture();

    let tree = file_tree(&result);

    assert!(tree.contains("app/"));
    assert!(tree.contains("views.py"));
    assert!(tree.contains("main.rs"));
    assert!(tree.contains("├── ") || tree.contains("└── "));
}
