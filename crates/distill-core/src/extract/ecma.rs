//! Pattern extraction for JavaScript and TypeScript (PHP rides along)
//!
//! Covers function declarations, arrow assignments, object methods, class
//! summaries with `extends` and a capped method list, React component
//! summaries with their hooks, and both import forms. PHP is close enough
//! to these patterns (`function`, `class … extends`, `require`) that it is
//! dispatched here rather than carrying its own tier.

#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;

use super::{body_window, push_unique, take_unique, Extraction, Extractor, CONTROL_FLOW_KEYWORDS, MAX_MEMBERS};

static FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:export[ \t]+)?(?:default[ \t]+)?(?:async[ \t]+)?function[ \t]+(\w+)[ \t]*\(([^)]*)\)")
        .expect("ecma function pattern")
});

static ARROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:const|let|var)[ \t]+(\w+)[ \t]*=[ \t]*(?:async[ \t]*)?\(([^)]*)\)[ \t]*=>")
        .expect("ecma arrow pattern")
});

static OBJECT_METHOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(\w+)[ \t]*:[ \t]*(?:async[ \t]*)?\(([^)]*)\)[ \t]*=>")
        .expect("ecma object method pattern")
});

static CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"class[ \t]+(\w+)(?:[ \t]+extends[ \t]+([\w.]+))?").expect("ecma class pattern")
});

static CLASS_METHOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:async[ \t]+)?(\w+)[ \t]*\([^)]*\)[ \t]*\{")
        .expect("ecma class method pattern"));

static COMPONENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:export[ \t]+)?(?:default[ \t]+)?function[ \t]+([A-Z]\w*)[ \t]*\(")
        .expect("ecma component pattern")
});

static HOOK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(use[A-Z]\w*)[ \t]*\(").expect("ecma hook pattern"));

static IMPORT_FROM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import[^\n]*?from[ \t]*['"]([^'"]+)['"]"#).expect("ecma import-from pattern")
});

static IMPORT_BARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*import[ \t]+['"]([^'"]+)['"]"#).expect("ecma bare import pattern")
});

static REQUIRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"require\([ \t]*['"]([^'"]+)['"][ \t]*\)"#).expect("ecma require pattern")
});

pub(crate) struct EcmaExtractor;

impl Extractor for EcmaExtractor {
    fn extract(&self, source: &str) -> Extraction {
        let mut out = Extraction::default();

        for caps in FUNCTION.captures_iter(source) {
            let name = &caps[1];
            if CONTROL_FLOW_KEYWORDS.contains(&name) {
                continue;
            }
            let params = caps[2].trim();
            push_unique(&mut out.signatures, format!("function {name}({params})"));
        }
        for caps in ARROW.captures_iter(source) {
            let name = &caps[1];
            let params = caps[2].trim();
            push_unique(&mut out.signatures, format!("const {name} = ({params}) =>"));
        }
        for caps in OBJECT_METHOD.captures_iter(source) {
            let name = &caps[1];
            if CONTROL_FLOW_KEYWORDS.contains(&name) {
                continue;
            }
            let params = caps[2].trim();
            push_unique(&mut out.signatures, format!("{name}: ({params}) =>"));
        }

        for caps in CLASS.captures_iter(source) {
            let full = caps.get(0).expect("whole match");
            let mut rendered = format!("class {}", &caps[1]);
            if let Some(base) = caps.get(2) {
                rendered.push_str(&format!(" extends {}", base.as_str()));
            }
            let methods = take_unique(
                CLASS_METHOD
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

        // React function components land next to classes: they play the
        // same structural role in a component tree
        for caps in COMPONENT.captures_iter(source) {
            let full = caps.get(0).expect("whole match");
            let mut rendered = format!("Component: {}", &caps[1]);
            let hooks = take_unique(
                HOOK.captures_iter(body_window(source, full.end()))
                    .filter_map(|m| m.get(1).map(|g| g.as_str())),
                MAX_MEMBERS,
            );
            if !hooks.is_empty() {
                rendered.push_str(&format!(" [hooks: {}]", hooks.join(", ")));
            }
            push_unique(&mut out.type_summaries, rendered);
        }

        for caps in IMPORT_FROM.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }
        for caps in IMPORT_BARE.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }
        for caps in REQUIRE.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }

        out
    }
}
