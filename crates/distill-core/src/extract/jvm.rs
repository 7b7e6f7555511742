//! Pattern extraction for Java and C#
//!
//! Class summaries with extends/implements, interface names, method
//! signatures with parameter lists, and `import`/`using` targets. Both
//! languages share enough surface syntax for one pattern set.

#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;

use super::{body_window, push_unique, take_unique, Extraction, Extractor, CONTROL_FLOW_KEYWORDS, MAX_MEMBERS};

static CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:(?:public|private|protected|abstract|final|static|sealed)[ \t]+)*class[ \t]+(\w+)(?:[ \t]+extends[ \t]+([\w.<>]+))?(?:[ \t]+implements[ \t]+([\w.,<>\s]+?))?[ \t]*\{",
    )
    .expect("jvm class pattern")
});

static INTERFACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:(?:public|private|protected)[ \t]+)?interface[ \t]+(\w+)")
        .expect("jvm interface pattern")
});

static METHOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:(?:public|private|protected|static|final|synchronized|abstract|override|virtual|async)[ \t]+)+[\w<>\[\],. ]+?[ \t](\w+)[ \t]*\(([^)]*)\)",
    )
    .expect("jvm method pattern")
});

static MEMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w<>\[\]]+[ \t]+(\w+)[ \t]*\([^)]*\)").expect("jvm member pattern")
});

static IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*import[ \t]+(?:static[ \t]+)?([\w.*]+)[ \t]*;").expect("jvm import pattern")
});

static USING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*using[ \t]+([\w.]+)[ \t]*;").expect("jvm using pattern")
});

pub(crate) struct JvmExtractor;

impl Extractor for JvmExtractor {
    fn extract(&self, source: &str) -> Extraction {
        let mut out = Extraction::default();

        for caps in CLASS.captures_iter(source) {
            let full = caps.get(0).expect("whole match");
            let mut rendered = format!("class {}", &caps[1]);
            if let Some(base) = caps.get(2) {
                rendered.push_str(&format!(" extends {}", base.as_str()));
            } else if let Some(interfaces) = caps.get(3) {
                // No extends clause: the first implemented interface is the
                // closest thing to a parent reference
                if let Some(first) = interfaces.as_str().split(',').next() {
                    rendered.push_str(&format!(" implements {}", first.trim()));
                }
            }
            let methods = take_unique(
                MEMBER
                    .captures_iter(body_window(source, full.end()))
                    .filter_map(|m| m.get(1).map(|g| g.as_str()))
                    .filter(|name| !CONTROL_FLOW_KEYWORDS.contains(name)),
                MAX_MEMBERS,
            );
            if !methods.is_empty() {
                rendered.push_str(&format!(" [methods: {}]", methods.join(", ")));
            }
            push_unique(&mut out.type_summaries, rendered);
        }

        for caps in INTERFACE.captures_iter(source) {
            push_unique(&mut out.type_summaries, format!("interface {}", &caps[1]));
        }

        for caps in METHOD.captures_iter(source) {
            let name = &caps[1];
            if CONTROL_FLOW_KEYWORDS.contains(&name) {
                continue;
            }
            let params = caps[2].trim();
            push_unique(&mut out.signatures, format!("{name}({params})"));
        }

        for caps in IMPORT.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }
        for caps in USING.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }

        out
    }
}
