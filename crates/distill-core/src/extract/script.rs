//! Pattern extraction for Python sources
//!
//! Best-effort line-oriented patterns: `def` signatures with parameters and
//! return annotation, `class` summaries with base and a capped method list,
//! and both import forms. A decorator on the line above a declaration is
//! kept as a prefixed marker.

#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;

use super::{body_window, push_unique, take_unique, Extraction, Extractor, MAX_MEMBERS};

static DEF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:async[ \t]+)?def[ \t]+(\w+)[ \t]*\(([^)]*)\)[ \t]*(?:->[ \t]*([^:\n]+))?:")
        .expect("python def pattern")
});

static CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*class[ \t]+(\w+)[ \t]*(?:\(([^)]*)\))?[ \t]*:").expect("python class pattern")
});

static METHOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"def[ \t]+(\w+)").expect("python method pattern"));

static IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*import[ \t]+([\w.]+)").expect("python import pattern"));

static FROM_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*from[ \t]+([\w.]+)[ \t]+import").expect("python from-import pattern")
});

pub(crate) struct ScriptExtractor;

impl Extractor for ScriptExtractor {
    fn extract(&self, source: &str) -> Extraction {
        let mut out = Extraction::default();

        for caps in DEF.captures_iter(source) {
            let start = caps.get(0).map_or(0, |m| m.start());
            let name = &caps[1];
            let params = caps[2].trim();
            let mut rendered = String::new();
            if let Some(decorator) = decorator_before(source, start) {
                rendered.push_str(&decorator);
                rendered.push(' ');
            }
            rendered.push_str(&format!("def {name}({params})"));
            if let Some(ret) = caps.get(3) {
                rendered.push_str(&format!(" -> {}", ret.as_str().trim()));
            }
            push_unique(&mut out.signatures, rendered);
        }

        for caps in CLASS.captures_iter(source) {
            let full = caps.get(0).expect("whole match");
            let name = &caps[1];
            let mut rendered = String::new();
            if let Some(decorator) = decorator_before(source, full.start()) {
                rendered.push_str(&decorator);
                rendered.push(' ');
            }
            rendered.push_str("class ");
            rendered.push_str(name);
            // One base reference: the first entry of the bases list
            if let Some(bases) = caps.get(2) {
                if let Some(base) = bases.as_str().split(',').next() {
                    let base = base.trim();
                    if !base.is_empty() {
                        rendered.push_str(&format!("({base})"));
                    }
                }
            }
            let methods = take_unique(
                METHOD
                    .captures_iter(body_window(source, full.end()))
                    .filter_map(|m| m.get(1).map(|g| g.as_str())),
                MAX_MEMBERS,
            );
            if !methods.is_empty() {
                rendered.push_str(&format!(" [methods: {}]", methods.join(", ")));
            }
            push_unique(&mut out.type_summaries, rendered);
        }

        for caps in IMPORT.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }
        for caps in FROM_IMPORT.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }

        out
    }
}

/// Decorator marker from the line above a declaration, if there is one
fn decorator_before(source: &str, decl_start: usize) -> Option<String> {
    let head = &source[..decl_start];
    let line_start = head.rfind('\n')?;
    let prev = head[..line_start].rsplit('\n').next()?.trim();
    prev.starts_with('@')
        .then(|| prev.split('(').next().unwrap_or(prev).trim().to_string())
}
