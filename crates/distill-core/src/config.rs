//! Scan configuration
//!
//! An explicit configuration value passed into the scan entry point.
//! There is no process-wide config object; callers construct one (or take
//! the default) per scan.

use serde::{Deserialize, Serialize};

/// Patterns excluded from every scan unless overridden
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "node_modules/",
    ".git/",
    "__pycache__/",
    ".venv/",
    "venv/",
    ".pytest_cache/",
    "target/",
    "*.pyc",
    ".coverage",
];

/// Extensions scanned even though no language maps to them
pub const DEFAULT_SUPPORTED_EXTENSIONS: &[&str] = &["rs", "py", "js", "ts", "java"];

/// Configuration for a single scan invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory, glob and literal patterns excluded from scanning
    pub ignore_patterns: Vec<String>,
    /// Extensions (without the dot) scanned even when the language table
    /// has no entry for them
    pub supported_extensions: Vec<String>,
    /// Line count above which a record carries signatures only
    pub context_threshold: usize,
    /// Largest line count still eligible for full content
    pub max_full_size: usize,
    /// Keep well-known configuration files in the scan
    pub include_config_files: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            supported_extensions: DEFAULT_SUPPORTED_EXTENSIONS
                .iter()
                .map(|e| (*e).to_string())
                .collect(),
            context_threshold: 500,
            max_full_size: 500,
            include_config_files: false,
        }
    }
}

impl ScanConfig {
    /// Replace the ignore patterns
    #[must_use]
    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Set both context thresholds
    #[must_use]
    pub fn with_thresholds(mut self, context_threshold: usize, max_full_size: usize) -> Self {
        self.context_threshold = context_threshold;
        self.max_full_size = max_full_size;
        self
    }

    /// Keep configuration files in the scan
    #[must_use]
    pub fn with_config_files(mut self) -> Self {
        self.include_config_files = true;
        self
    }
}
