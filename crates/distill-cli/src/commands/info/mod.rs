//! Info command: statistics for a scanned tree

use std::path::Path;

use anyhow::Result;
use distill_core::stats::{detect_project, file_tree, file_type_histogram, largest_files};
use distill_core::{scan_directory, ScanConfig};
use tracing::info;

/// Run the info command
///
/// # Errors
/// Returns an error if the root is invalid.
pub fn run(path: &Path, top: usize) -> Result<()> {
    info!("Collecting statistics for: {}", path.display());

    let result = scan_directory(path, &ScanConfig::default())?;

    let project = detect_project(&result);
    println!("Project:");
    match project.primary_language {
        Some(language) => println!("  primary language: {language}"),
        None => println!("  primary language: (no files)"),
    }
    if !project.frameworks.is_empty() {
        println!("  frameworks: {}", project.frameworks.join(", "));
    }

    println!("\nFile types:");
    for (language, count) in file_type_histogram(&result) {
        println!("  {language}: {count}");
    }

    println!("\nLargest files:");
    for record in largest_files(&result, top) {
        println!(
            "  {} ({} lines, ~{} tokens)",
            record.relative_path.display(),
            record.line_count,
            record.token_estimate
        );
    }

    println!("\n{}", file_tree(&result));
    println!("{}", result.summary());

    Ok(())
}

#[cfg(test)]
mod tests;
