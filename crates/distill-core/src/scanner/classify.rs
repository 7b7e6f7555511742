//! Path classification
//!
//! Decides, per candidate file and in short-circuit order: ignored, binary,
//! configuration, or scannable with a detected language. Files with an
//! unrecognized extension that is not configured as supported are not
//! scannable and are skipped silently.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::ignore_rules::IgnoreRules;
use super::language::Language;
use crate::config::ScanConfig;

/// How many leading bytes are sampled for the binary check
const SNIFF_BYTES: usize = 8192;

/// Fraction of non-text bytes above which a file counts as binary
const BINARY_THRESHOLD: f64 = 0.30;

/// Well-known configuration filenames matched exactly
const CONFIG_FILENAMES: &[&str] = &[
    ".gitignore",
    ".dockerignore",
    ".npmignore",
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "Pipfile",
    "Pipfile.lock",
    "requirements.txt",
    "setup.py",
    "setup.cfg",
    "pyproject.toml",
    "Cargo.toml",
    "Cargo.lock",
    "tsconfig.json",
    "jsconfig.json",
    ".eslintrc",
    ".prettierrc",
    ".editorconfig",
    "Dockerfile",
    "docker-compose.yml",
    "Makefile",
    "CMakeLists.txt",
    ".env",
    ".env.example",
    ".env.local",
    "webpack.config.js",
    "vite.config.js",
    ".gitlab-ci.yml",
    ".travis.yml",
    "azure-pipelines.yml",
];

/// Extensions that mark configuration files
const CONFIG_EXTENSIONS: &[&str] = &[
    "lock", "toml", "ini", "cfg", "conf", "config", "yaml", "yml",
];

/// Source extensions that keep a dotfile out of the config bucket
const SOURCE_EXTENSIONS: &[&str] = &["rs", "py", "js", "ts", "java", "c", "cpp", "h"];

/// Outcome of classifying one candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Matches an ignore rule
    Ignored,
    /// Content sniffing says binary, or the file is unreadable
    Binary,
    /// Configuration file, excluded unless the scan includes them
    Config,
    /// Source file with a detected language
    Scannable(Language),
    /// Unrecognized and not configured as supported; skipped silently
    Unsupported,
}

/// Classify one candidate file, short-circuiting in rule order
#[must_use]
pub fn classify(
    path: &Path,
    relative: &Path,
    rules: &IgnoreRules,
    config: &ScanConfig,
) -> Classification {
    if rules.matches(relative) {
        return Classification::Ignored;
    }
    if is_binary_file(path) {
        return Classification::Binary;
    }
    if !config.include_config_files && is_config_file(path) {
        return Classification::Config;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match Language::from_extension(&ext) {
        Some(language) => Classification::Scannable(language),
        None if config.supported_extensions.iter().any(|e| *e == ext) => {
            Classification::Scannable(Language::Unknown)
        }
        None => Classification::Unsupported,
    }
}

/// Sniff the first 8 KiB: null bytes or a high non-text ratio mean binary.
/// Unreadable files are treated as binary (fail safe); empty files as text.
fn is_binary_file(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return true;
    };
    let mut buf = [0u8; SNIFF_BYTES];
    let Ok(read) = file.read(&mut buf) else {
        return true;
    };
    let chunk = &buf[..read];
    if chunk.is_empty() {
        return false;
    }
    if chunk.contains(&0) {
        return true;
    }
    let non_text = chunk.iter().filter(|b| !is_text_byte(**b)).count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = non_text as f64 / chunk.len() as f64;
    ratio > BINARY_THRESHOLD
}

/// Textual byte values: BEL..CR control range, ESC, and the printable range
/// without DEL
fn is_text_byte(byte: u8) -> bool {
    matches!(byte, 7..=10 | 12 | 13 | 27) || (byte >= 0x20 && byte != 0x7F)
}

/// Name and extension heuristics for configuration files
fn is_config_file(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if CONFIG_FILENAMES.contains(&name.as_str()) {
        return true;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if name.starts_with('.') && !SOURCE_EXTENSIONS.contains(&ext.as_str()) {
        return true;
    }
    CONFIG_EXTENSIONS.contains(&ext.as_str())
}
