//! Scan command: scan a source tree and print the digest summary

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use distill_core::{scan_directory, ScanConfig, ScanResult};
use tracing::{info, warn};

use super::types::ScanOptions;

/// Run the scan command
///
/// # Errors
/// Returns an error if the root is invalid or the JSON output cannot be
/// written.
pub fn run(path: &Path, options: &ScanOptions) -> Result<()> {
    info!("Scanning source tree: {}", path.display());

    let config = build_config(options);
    let result = scan_directory(path, &config)?;

    for error in &result.errors {
        warn!("skipped: {error}");
    }
    info!(
        "✓ Scan completed: {} files, {} lines, ~{} tokens",
        result.total_files(),
        result.total_lines(),
        result.total_tokens()
    );

    println!("{}", result.summary());

    if let Some(json_path) = &options.json {
        write_json(&result, json_path)?;
    }

    Ok(())
}

/// Translate the CLI flags into an engine configuration
pub(crate) fn build_config(options: &ScanOptions) -> ScanConfig {
    let mut config = ScanConfig::default();
    if options.include_config {
        config = config.with_config_files();
    }
    if let Some(threshold) = options.context_threshold {
        config.context_threshold = threshold;
    }
    if let Some(max_full) = options.max_full_size {
        config.max_full_size = max_full;
    }
    config
        .supported_extensions
        .extend(options.extensions.iter().map(|e| e.trim_start_matches('.').to_string()));
    config.ignore_patterns.extend(options.ignore.iter().cloned());
    config
}

/// Serialize the full result; `-` goes to stdout
fn write_json(result: &ScanResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serializing scan result")?;
    if path.to_str() == Some("-") {
        println!("{json}");
    } else {
        fs::write(path, json)
            .with_context(|| format!("writing scan result to {}", path.display()))?;
        info!("wrote JSON result to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests;
