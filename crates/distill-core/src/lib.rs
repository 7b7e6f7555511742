//! distill-core: Token-budgeted code context extraction
//!
//! Scans a source tree and produces a structured digest of its contents:
//! per-file declarations (functions, types, imports), whole-file text for
//! small files and signature-only summaries for large ones. The digest is a
//! compact, language-agnostic representation of a codebase meant for
//! downstream consumers such as prompt builders, indexers or reports.
//!
//! # Pipeline
//!
//! One scan resolves the effective ignore rules once, then walks the tree.
//! Each candidate file is classified (ignored, binary, config, scannable),
//! dispatched to a per-language extraction strategy, and run through the
//! context-level selector that decides between full text and signatures
//! based on the configured line thresholds.
//!
//! Rust sources get a real parse tree; every other language family is
//! handled by best-effort pattern extraction.

pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod model;
pub mod scanner;
pub mod stats;

// Re-export commonly used types
pub use config::ScanConfig;
pub use context::{estimate_tokens, select_context, ContextSelection};
pub use error::ScanError;
pub use extract::{extractor_for, Extraction};
pub use model::{ContextLevel, ScanResult, SourceFileRecord};
pub use scanner::{compute_file_hash, scan_directory, Language};
