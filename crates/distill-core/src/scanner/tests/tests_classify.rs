//! Tests for path classification

#![allow(clippy::expect_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::config::ScanConfig;
use crate::scanner::{classify, Classification, IgnoreRules, Language};

fn no_rules() -> IgnoreRules {
    IgnoreRules::resolve(&[], Path::new("/nonexistent"))
}

#[test]
fn test_source_file_is_scannable_with_language() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("main.rs");
    fs::write(&path, "fn main() {}\n").expect("Failed to write file");

    let classification = classify(&path, Path::new("main.rs"), &no_rules(), &ScanConfig::default());

    assert_eq!(classification, Classification::Scannable(Language::Rust));
}

#[test]
fn test_ignored_path_short_circuits() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("module.pyc");
    fs::write(&path, &[0u8, 1, 2]).expect("Failed to write file");

    let rules = IgnoreRules::resolve(&["*.pyc".to_string()], temp_dir.path());
    let classification = classify(&path, Path::new("module.pyc"), &rules, &ScanConfig::default());

    // Ignore wins even though the content is binary
    assert_eq!(classification, Classification::Ignored);
}

#[test]
fn test_null_byte_means_binary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("blob.py");
    fs::write(&path, b"print('hi')\x00rest").expect("Failed to write file");

    let classification = classify(&path, Path::new("blob.py"), &no_rules(), &ScanConfig::default());

    assert_eq!(classification, Classification::Binary);
}

#[test]
fn test_mostly_control_bytes_mean_binary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("garbage.py");
    let mut bytes = vec![1u8; 90];
    bytes.extend_from_slice(b"some text");
    fs::write(&path, &bytes).expect("Failed to write file");

    let classification =
        classify(&path, Path::new("garbage.py"), &no_rules(), &ScanConfig::default());

    assert_eq!(classification, Classification::Binary);
}

#[test]
fn test_empty_file_is_not_binary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("empty.py");
    fs::write(&path, b"").expect("Failed to write file");

    let classification = classify(&path, Path::new("empty.py"), &no_rules(), &ScanConfig::default());

    assert_eq!(classification, Classification::Scannable(Language::Python));
}

#[test]
fn test_unreadable_file_is_treated_as_binary() {
    // A path that cannot be opened fails safe into the binary bucket
    let path = Path::new("/nonexistent/dir/file.py");

    let classification = classify(path, Path::new("file.py"), &no_rules(), &ScanConfig::default());

    assert_eq!(classification, Classification::Binary);
}

#[test]
fn test_well_known_config_names_are_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["package.json", "Makefile", "Dockerfile", ".env"] {
        let path = temp_dir.path().join(name);
        fs::write(&path, "content\n").expect("Failed to write file");

        let classification = classify(&path, Path::new(name), &no_rules(), &ScanConfig::default());

        assert_eq!(classification, Classification::Config, "{name}");
    }
}

#[test]
fn test_config_extensions_are_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["settings.toml", "app.ini", "ci.yaml", "deps.lock"] {
        let path = temp_dir.path().join(name);
        fs::write(&path, "key = value\n").expect("Failed to write file");

        let classification = classify(&path, Path::new(name), &no_rules(), &ScanConfig::default());

        assert_eq!(classification, Classification::Config, "{name}");
    }
}

#[test]
fn test_dotfile_with_source_extension_stays_scannable() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(".hidden.py");
    fs::write(&path, "x = 1\n").expect("Failed to write file");

    let classification =
        classify(&path, Path::new(".hidden.py"), &no_rules(), &ScanConfig::default());

    assert_eq!(classification, Classification::Scannable(Language::Python));
}

#[test]
fn test_dotfile_without_source_extension_is_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(".babelrc");
    fs::write(&path, "{}\n").expect("Failed to write file");

    let classification = classify(&path, Path::new(".babelrc"), &no_rules(), &ScanConfig::default());

    assert_eq!(classification, Classification::Config);
}

#[test]
fn test_include_config_files_flag_skips_the_config_test() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("ci.yaml");
    fs::write(&path, "jobs: []\n").expect("Failed to write file");

    let config = ScanConfig::default().with_config_files();
    let classification = classify(&path, Path::new("ci.yaml"), &no_rules(), &config);

    assert_eq!(classification, Classification::Scannable(Language::Yaml));
}

#[test]
fn test_unrecognized_extension_is_unsupported() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("notes.txt");
    fs::write(&path, "plain text\n").expect("Failed to write file");

    let classification = classify(&path, Path::new("notes.txt"), &no_rules(), &ScanConfig::default());

    assert_eq!(classification, Classification::Unsupported);
}

#[test]
fn test_configured_extension_without_language_scans_as_unknown() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("notes.txt");
    fs::write(&path, "plain text\n").expect("Failed to write file");

    let mut config = ScanConfig::default();
    config.supported_extensions.push("txt".to_string());
    let classification = classify(&path, Path::new("notes.txt"), &no_rules(), &config);

    assert_eq!(classification, Classification::Scannable(Language::Unknown));
}
