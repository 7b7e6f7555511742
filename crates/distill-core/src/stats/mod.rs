//! Result statistics and reporting helpers
//!
//! Aggregate views over a finished [`ScanResult`]: file-type histogram,
//! largest files, naive project/framework detection from the collected
//! import references, and a directory-tree rendering of the records.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{ScanResult, SourceFileRecord};
use crate::scanner::Language;

/// Import prefixes mapped to the framework they betray.
///
/// Deliberately naive: a prefix match on raw reference strings. The goal is
/// a hint for downstream consumers, not dependency resolution.
const FRAMEWORK_KEYWORDS: &[(&str, &str)] = &[
    ("django", "Django"),
    ("flask", "Flask"),
    ("fastapi", "FastAPI"),
    ("pytest", "pytest"),
    ("numpy", "NumPy"),
    ("pandas", "pandas"),
    ("react", "React"),
    ("next", "Next.js"),
    ("vue", "Vue"),
    ("@angular", "Angular"),
    ("express", "Express"),
    ("org.springframework", "Spring"),
    ("org.junit", "JUnit"),
    ("tokio", "Tokio"),
    ("actix_web", "Actix Web"),
    ("axum", "Axum"),
    ("serde", "Serde"),
    ("clap", "clap"),
];

/// Naive project classification derived from a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Language with the most records, if any records exist
    pub primary_language: Option<Language>,
    /// Every language seen, most records first
    pub languages: Vec<Language>,
    /// Frameworks betrayed by the collected imports, sorted
    pub frameworks: Vec<String>,
}

/// Count of records per detected language
#[must_use]
pub fn file_type_histogram(result: &ScanResult) -> BTreeMap<Language, usize> {
    let mut histogram = BTreeMap::new();
    for record in &result.records {
        *histogram.entry(record.detected_language).or_insert(0) += 1;
    }
    histogram
}

/// Top `n` records by line count, largest first
#[must_use]
pub fn largest_files(result: &ScanResult, n: usize) -> Vec<&SourceFileRecord> {
    let mut records: Vec<&SourceFileRecord> = result.records.iter().collect();
    records.sort_by(|a, b| b.line_count.cmp(&a.line_count));
    records.truncate(n);
    records
}

/// Detect the dominant language and any recognizable frameworks
#[must_use]
pub fn detect_project(result: &ScanResult) -> ProjectInfo {
    let histogram = file_type_histogram(result);
    let mut by_count: Vec<(Language, usize)> = histogram.into_iter().collect();
    by_count.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let languages: Vec<Language> = by_count.iter().map(|(lang, _)| *lang).collect();
    let primary_language = languages.first().copied();

    let mut frameworks = BTreeSet::new();
    for record in &result.records {
        for reference in &record.references {
            for (prefix, framework) in FRAMEWORK_KEYWORDS {
                if reference.starts_with(prefix) {
                    frameworks.insert((*framework).to_string());
                }
            }
        }
    }

    ProjectInfo {
        primary_language,
        languages,
        frameworks: frameworks.into_iter().collect(),
    }
}

/// Render the scanned records as a directory tree
#[must_use]
pub fn file_tree(result: &ScanResult) -> String {
    let mut root = TreeNode::default();
    for record in &result.records {
        let components: Vec<String> = record
            .relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        root.insert(&components);
    }

    let root_name = result
        .root
        .file_name()
        .map_or_else(|| result.root.display().to_string(), |n| n.to_string_lossy().into_owned());
    let mut rendered = format!("{root_name}/\n");
    root.render("", &mut rendered);
    rendered
}

/// Intermediate directory node used only while rendering the tree
#[derive(Debug, Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
    is_file: bool,
}

impl TreeNode {
    fn insert(&mut self, components: &[String]) {
        let Some((first, rest)) = components.split_first() else {
            return;
        };
        let child = self.children.entry(first.clone()).or_default();
        if rest.is_empty() {
            child.is_file = true;
        } else {
            child.insert(rest);
        }
    }

    fn render(&self, indent: &str, out: &mut String) {
        let count = self.children.len();
        for (i, (name, child)) in self.children.iter().enumerate() {
            let last = i + 1 == count;
            let connector = if last { "└── " } else { "├── " };
            out.push_str(indent);
            out.push_str(connector);
            out.push_str(name);
            if !child.is_file || !child.children.is_empty() {
                out.push('/');
            }
            out.push('\n');
            let next_indent = format!("{indent}{}", if last { "    " } else { "│   " });
            child.render(&next_indent, out);
        }
    }
}

#[cfg(test)]
mod tests;
