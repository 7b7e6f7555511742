//! Scanner module: traversal, classification and aggregation
//!
//! Responsible for walking a directory tree, resolving the effective ignore
//! rules, classifying each candidate path and assembling the per-file
//! records into a [`crate::model::ScanResult`].

mod classify;
mod ignore_rules;
mod language;
mod walk;

use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

pub use classify::{classify, Classification};
pub use ignore_rules::IgnoreRules;
pub use language::Language;
pub use walk::scan_directory;

/// SHA-256 hex digest of a file's bytes.
///
/// External caches key scan results by content hash; this helper computes
/// that key and nothing else. The engine itself stores no state.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn compute_file_hash(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests;
