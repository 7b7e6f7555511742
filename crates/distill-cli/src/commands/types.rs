//! Command types shared between main and library

use std::path::PathBuf;

/// Options for the scan command, collected from the CLI flags
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Write the full result as JSON to this path (`-` for stdout)
    pub json: Option<PathBuf>,
    /// Keep configuration files in the scan
    pub include_config: bool,
    /// Line count above which a record carries signatures only
    pub context_threshold: Option<usize>,
    /// Largest line count still eligible for full content
    pub max_full_size: Option<usize>,
    /// Extra extensions to scan besides the built-in language table
    pub extensions: Vec<String>,
    /// Extra ignore patterns merged with the defaults
    pub ignore: Vec<String>,
}
