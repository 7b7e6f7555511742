//! Scan aggregator
//!
//! Walks the tree once in sorted order, applies classification and
//! extraction per file and assembles an immutable
//! [`crate::model::ScanResult`]. A single unreadable or malformed file
//! never fails the whole scan.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use super::classify::{classify, Classification};
use super::ignore_rules::IgnoreRules;
use super::language::Language;
use crate::config::ScanConfig;
use crate::context::select_context;
use crate::error::ScanError;
use crate::extract::extractor_for;
use crate::model::{ScanResult, SourceFileRecord};

/// Scan a directory tree and extract per-file context.
///
/// Resolves ignore rules once, then walks the tree classifying each file:
/// ignored, binary and excluded config paths land in `ignored_paths` (with
/// a reason suffix where applicable), unreadable files land in `errors`,
/// and everything scannable becomes a record with extraction results and a
/// context level.
///
/// # Errors
/// Returns [`ScanError`] when the root does not exist or is not a
/// directory. Every later failure is recorded on the result instead.
pub fn scan_directory(root: &Path, config: &ScanConfig) -> Result<ScanResult, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

    let rules = IgnoreRules::resolve(&config.ignore_patterns, &root);
    let mut records = Vec::new();
    let mut ignored_paths = BTreeSet::new();
    let mut errors = Vec::new();

    if rules.from_ignore_file() > 0 {
        ignored_paths.insert(format!(
            ".gitignore (loaded {} patterns)",
            rules.from_ignore_file()
        ));
    }

    let mut walker = WalkDir::new(&root).sort_by_file_name().into_iter();
    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                errors.push(format!(
                    "{}: {err}",
                    err.path().unwrap_or(&root).display()
                ));
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&root) else {
            continue;
        };

        if entry.file_type().is_dir() {
            if rules.matches(relative) {
                ignored_paths.insert(display_path(relative));
                walker.skip_current_dir();
            }
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        match classify(entry.path(), relative, &rules, config) {
            Classification::Ignored => {
                ignored_paths.insert(display_path(relative));
            }
            Classification::Binary => {
                ignored_paths.insert(format!("{} (binary)", display_path(relative)));
            }
            Classification::Config => {
                ignored_paths.insert(format!("{} (config)", display_path(relative)));
            }
            Classification::Unsupported => {
                debug!("skipping unsupported file: {}", relative.display());
            }
            Classification::Scannable(language) => {
                match scan_file(entry.path(), relative, language, config) {
                    Ok(record) => records.push(record),
                    Err(err) => {
                        errors.push(format!("{}: {err}", entry.path().display()));
                    }
                }
            }
        }
    }

    let result = ScanResult::new(root, records, ignored_paths, errors);
    info!(
        "scan complete: {} files, {} lines, ~{} tokens",
        result.total_files(),
        result.total_lines(),
        result.total_tokens()
    );
    Ok(result)
}

/// Read, extract and select context for one scannable file
fn scan_file(
    path: &Path,
    relative: &Path,
    language: Language,
    config: &ScanConfig,
) -> io::Result<SourceFileRecord> {
    let bytes = fs::read(path)?;
    let size_bytes = bytes.len() as u64;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let line_count = text.lines().count();

    let extraction = extractor_for(language).extract(&text);
    let selection = select_context(line_count, text, &extraction, config);

    Ok(SourceFileRecord {
        absolute_path: path.to_path_buf(),
        relative_path: relative.to_path_buf(),
        detected_language: language,
        size_bytes,
        line_count,
        signatures: extraction.signatures,
        type_summaries: extraction.type_summaries,
        references: extraction.references,
        full_text: selection.full_text,
        token_estimate: selection.token_estimate,
        context_level: selection.context_level,
    })
}

/// Relative path rendered with forward slashes
fn display_path(relative: &Path) -> String {
    relative.to_string_lossy().replace('\\', "/")
}
