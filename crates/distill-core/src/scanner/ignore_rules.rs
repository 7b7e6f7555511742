//! Ignore-rule resolution and matching
//!
//! Merges built-in default patterns with patterns read from the scan
//! root's ignore file into one effective rule set. Three pattern forms are
//! recognized: directory patterns (`build/`), wildcard globs (`*.pyc`) and
//! exact literals.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

/// Name of the directory-local ignore file read from the scan root
const IGNORE_FILE: &str = ".gitignore";

/// One compiled ignore rule
#[derive(Debug, Clone)]
enum Rule {
    /// `build/`: matches when any path component equals the directory name
    Directory(String),
    /// `*.pyc`: glob translated to a start-anchored regex
    Glob(Regex),
    /// anything else: contained in the path string, or the final component
    Literal(String),
}

impl Rule {
    fn compile(pattern: &str) -> Self {
        if let Some(dir) = pattern.strip_suffix('/') {
            return Self::Directory(dir.to_string());
        }
        if pattern.contains('*') || pattern.contains('?') {
            if let Some(re) = glob_to_regex(pattern) {
                return Self::Glob(re);
            }
            debug!("unusable glob pattern treated as literal: {pattern}");
        }
        Self::Literal(pattern.to_string())
    }

    fn matches(&self, path_str: &str, relative: &Path) -> bool {
        match self {
            Self::Directory(dir) => relative
                .components()
                .any(|c| c.as_os_str() == OsStr::new(dir)),
            Self::Glob(re) => re.is_match(path_str),
            Self::Literal(lit) => {
                path_str.contains(lit.as_str())
                    || relative.file_name() == Some(OsStr::new(lit))
            }
        }
    }
}

/// Effective ignore rules for one scan
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    rules: Vec<Rule>,
    from_ignore_file: usize,
}

impl IgnoreRules {
    /// Merge the default patterns with the root's ignore file.
    ///
    /// Comment and blank lines are stripped and negation patterns (`!…`)
    /// are dropped without error. A missing or unreadable ignore file
    /// degrades to the defaults alone.
    #[must_use]
    pub fn resolve(defaults: &[String], root: &Path) -> Self {
        let file_patterns = read_ignore_file(&root.join(IGNORE_FILE));
        let from_ignore_file = file_patterns.len();
        if from_ignore_file > 0 {
            debug!("loaded {from_ignore_file} patterns from {IGNORE_FILE}");
        }

        let mut seen = BTreeSet::new();
        let mut rules = Vec::new();
        for pattern in defaults.iter().map(String::as_str).chain(
            file_patterns.iter().map(String::as_str),
        ) {
            if seen.insert(pattern.to_string()) {
                rules.push(Rule::compile(pattern));
            }
        }
        Self {
            rules,
            from_ignore_file,
        }
    }

    /// Count of patterns sourced from the ignore file, for diagnostics
    #[must_use]
    pub fn from_ignore_file(&self) -> usize {
        self.from_ignore_file
    }

    /// Whether a root-relative path matches any rule
    #[must_use]
    pub fn matches(&self, relative: &Path) -> bool {
        let path_str = relative.to_string_lossy().replace('\\', "/");
        self.rules.iter().any(|r| r.matches(&path_str, relative))
    }
}

/// Read ignore patterns from a file; absent or unreadable yields none
fn read_ignore_file(path: &Path) -> Vec<String> {
    let Ok(contents) = fs::read_to_string(path) else {
        return Vec::new();
    };
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .map(ToString::to_string)
        .collect()
}

/// Translate a glob into a start-anchored regex: `*` spans, `?` is one char
fn glob_to_regex(pattern: &str) -> Option<Regex> {
    let mut regex = String::with_capacity(pattern.len() + 8);
    regex.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            c if "\\.+()[]{}^$|".contains(c) => {
                regex.push('\\');
                regex.push(c);
            }
            c => regex.push(c),
        }
    }
    Regex::new(&regex).ok()
}
