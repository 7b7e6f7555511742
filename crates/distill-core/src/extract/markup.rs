//! Pattern extraction for HTML
//!
//! Markup has no functions or classes, so the three slots are overloaded:
//! element ids and event-handler attributes fill the signatures slot, CSS
//! class names the type slot, and script/stylesheet references the
//! references slot.

#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;

use super::{push_unique, Extraction, Extractor};

static ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"id=["']([^"']+)["']"#).expect("html id pattern"));

static CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"class=["']([^"']+)["']"#).expect("html class pattern"));

static HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(on\w+)[ \t]*=").expect("html handler pattern"));

static SCRIPT_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<script[^>]+src=["']([^"']+)["']"#).expect("html script pattern")
});

static LINK_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<link[^>]+href=["']([^"']+)["']"#).expect("html link pattern")
});

pub(crate) struct MarkupExtractor;

impl Extractor for MarkupExtractor {
    fn extract(&self, source: &str) -> Extraction {
        let mut out = Extraction::default();

        for caps in ID.captures_iter(source) {
            push_unique(&mut out.signatures, caps[1].to_string());
        }
        for caps in HANDLER.captures_iter(source) {
            push_unique(&mut out.signatures, caps[1].to_string());
        }

        for caps in CLASS.captures_iter(source) {
            for class in caps[1].split_whitespace() {
                push_unique(&mut out.type_summaries, class.to_string());
            }
        }

        for caps in SCRIPT_SRC.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }
        for caps in LINK_HREF.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }

        out
    }
}
