//! Engine error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scan before traversal begins.
///
/// Everything that can go wrong after traversal has started is recorded on
/// the [`crate::model::ScanResult`] instead and never fails the scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("path is not a directory: {0}")]
    NotADirectory(PathBuf),
}
