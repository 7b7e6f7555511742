//! Pattern extraction for C, C++ and Go
//!
//! Function definitions and prototypes, class/struct names, `#include`
//! targets, Go `func` declarations (receiver methods included) and Go
//! import forms. Pointer-heavy C declarations are matched loosely; the
//! control-flow filter keeps `if`/`while` headers out of the result.

#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;

use super::{push_unique, Extraction, Extractor, CONTROL_FLOW_KEYWORDS};

static FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:[\w:*&<>~]+[ \t]+)+\*?(\w+)[ \t]*\(([^)]*)\)[ \t]*(?:const[ \t]*)?[{;]")
        .expect("cfamily function pattern")
});

static CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bclass[ \t]+(\w+)").expect("cfamily class pattern"));

static STRUCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bstruct[ \t]+(\w+)").expect("cfamily struct pattern"));

static INCLUDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"#include[ \t]*[<"]([^>"]+)[>"]"#).expect("cfamily include pattern")
});

static GO_FUNC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^func[ \t]+(?:\([^)]*\)[ \t]*)?(\w+)[ \t]*\(([^)]*)\)")
        .expect("go func pattern")
});

static GO_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*import[ \t]+"([^"]+)""#).expect("go import pattern")
});

static GO_IMPORT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^import[ \t]*\(([^)]*)\)").expect("go import block pattern")
});

static QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("quoted string pattern"));

pub(crate) struct CFamilyExtractor;

impl Extractor for CFamilyExtractor {
    fn extract(&self, source: &str) -> Extraction {
        let mut out = Extraction::default();

        for caps in FUNCTION.captures_iter(source) {
            let name = &caps[1];
            if CONTROL_FLOW_KEYWORDS.contains(&name) {
                continue;
            }
            let params = caps[2].trim();
            push_unique(&mut out.signatures, format!("{name}({params})"));
        }
        for caps in GO_FUNC.captures_iter(source) {
            let name = &caps[1];
            let params = caps[2].trim();
            push_unique(&mut out.signatures, format!("func {name}({params})"));
        }

        for caps in CLASS.captures_iter(source) {
            push_unique(&mut out.type_summaries, format!("class {}", &caps[1]));
        }
        for caps in STRUCT.captures_iter(source) {
            push_unique(&mut out.type_summaries, format!("struct {}", &caps[1]));
        }

        for caps in INCLUDE.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }
        for caps in GO_IMPORT.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }
        for caps in GO_IMPORT_BLOCK.captures_iter(source) {
            for quoted in QUOTED.captures_iter(&caps[1]) {
                push_unique(&mut out.references, quoted[1].to_string());
            }
        }

        out
    }
}
