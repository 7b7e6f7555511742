//! Pattern extraction for stylesheets (CSS, SCSS, Sass, Less)
//!
//! Slot overloading for a declaration-free family: element selectors and
//! at-rules fill the signatures slot, class selectors the type slot, id
//! selectors and custom properties the references slot.

#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;

use super::{push_unique, Extraction, Extractor};

static CLASS_SELECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([a-zA-Z_][\w-]*)\s*\{").expect("css class selector pattern"));

static ID_SELECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([a-zA-Z_][\w-]*)\s*\{").expect("css id selector pattern"));

static ELEMENT_SELECTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*([a-zA-Z][\w-]*(?::[\w-]+)?)\s*\{").expect("css element selector pattern")
});

static AT_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([a-zA-Z-]+)").expect("css at-rule pattern"));

static CUSTOM_PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(--[\w-]+)\s*:").expect("css custom property pattern"));

pub(crate) struct StyleExtractor;

impl Extractor for StyleExtractor {
    fn extract(&self, source: &str) -> Extraction {
        let mut out = Extraction::default();

        for caps in ELEMENT_SELECTOR.captures_iter(source) {
            push_unique(&mut out.signatures, caps[1].to_string());
        }
        for caps in AT_RULE.captures_iter(source) {
            push_unique(&mut out.signatures, format!("@{}", &caps[1]));
        }

        for caps in CLASS_SELECTOR.captures_iter(source) {
            push_unique(&mut out.type_summaries, caps[1].to_string());
        }

        for caps in ID_SELECTOR.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }
        for caps in CUSTOM_PROPERTY.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }

        out
    }
}
