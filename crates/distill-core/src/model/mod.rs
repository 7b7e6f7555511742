//! Scan result model types
//!
//! A [`ScanResult`] and its [`SourceFileRecord`]s are created fresh per scan
//! invocation, fully populated before they are returned, and owned
//! exclusively by the caller afterwards. The aggregate totals are computed
//! once by [`ScanResult::new`] from the records; they are never mutated
//! independently.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scanner::Language;

/// Whether a record carries full source text or extracted signatures only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextLevel {
    Full,
    Signatures,
}

impl std::fmt::Display for ContextLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Signatures => write!(f, "signatures"),
        }
    }
}

/// Per-file result of a scan
///
/// Invariant: `context_level == Full` exactly when `full_text` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFileRecord {
    /// Absolute path on disk
    pub absolute_path: PathBuf,
    /// Path relative to the scan root
    pub relative_path: PathBuf,
    /// Language resolved from the file extension
    pub detected_language: Language,
    /// File size in bytes
    pub size_bytes: u64,
    /// Number of lines in the file
    pub line_count: usize,
    /// Compact renderings of declared functions and methods
    pub signatures: Vec<String>,
    /// Summaries of declared classes, structs and interfaces
    pub type_summaries: Vec<String>,
    /// Import and include targets
    pub references: Vec<String>,
    /// Complete source text, present only at [`ContextLevel::Full`]
    pub full_text: Option<String>,
    /// Approximate token cost of this record
    pub token_estimate: usize,
    /// Whether this record carries full text or signatures only
    pub context_level: ContextLevel,
}

/// Result of one scan invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Root directory that was scanned
    pub root: PathBuf,
    /// Per-file records in traversal order
    pub records: Vec<SourceFileRecord>,
    /// Relative paths (or rule descriptions) excluded from the scan
    pub ignored_paths: BTreeSet<String>,
    /// Non-fatal per-file failures, one entry per failed file
    pub errors: Vec<String>,
    total_files: usize,
    total_lines: usize,
    total_tokens: usize,
}

impl ScanResult {
    /// Assemble a result, computing the aggregate totals from the records
    #[must_use]
    pub fn new(
        root: PathBuf,
        records: Vec<SourceFileRecord>,
        ignored_paths: BTreeSet<String>,
        errors: Vec<String>,
    ) -> Self {
        let total_files = records.len();
        let total_lines = records.iter().map(|r| r.line_count).sum();
        let total_tokens = records.iter().map(|r| r.token_estimate).sum();
        Self {
            root,
            records,
            ignored_paths,
            errors,
            total_files,
            total_lines,
            total_tokens,
        }
    }

    /// Number of scanned files
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.total_files
    }

    /// Sum of line counts over all records
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Sum of token estimates over all records
    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    /// Short human-readable totals block
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Scanned {} files\nTotal lines: {}\nEstimated tokens: {}\nIgnored paths: {}\nErrors: {}",
            self.total_files,
            self.total_lines,
            self.total_tokens,
            self.ignored_paths.len(),
            self.errors.len()
        )
    }
}
