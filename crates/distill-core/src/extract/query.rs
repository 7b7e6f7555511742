//! Pattern extraction for SQL
//!
//! Slot overloading for a schema language: stored routines with their
//! parameter lists fill the signatures slot, tables (annotated with a
//! primary-key column when one is declared inline) and views the type
//! slot, indexes the references slot.

#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;

use super::{body_window, push_unique, Extraction, Extractor};

static TABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)CREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?[`"]?(\w+)[`"]?"#)
        .expect("sql table pattern")
});

static PRIMARY_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\w+)\s+[\w()]+[^,\n]*\bPRIMARY\s+KEY").expect("sql primary key pattern")
});

static VIEW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)CREATE\s+(?:OR\s+REPLACE\s+)?VIEW\s+[`"]?(\w+)[`"]?"#)
        .expect("sql view pattern")
});

static FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)CREATE\s+(?:OR\s+REPLACE\s+)?FUNCTION\s+[`"]?(\w+)[`"]?\s*\(([^)]*)\)"#)
        .expect("sql function pattern")
});

static PROCEDURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)CREATE\s+(?:OR\s+REPLACE\s+)?PROCEDURE\s+[`"]?(\w+)[`"]?\s*\(([^)]*)\)"#)
        .expect("sql procedure pattern")
});

static INDEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)CREATE\s+(?:UNIQUE\s+)?INDEX\s+[`"]?(\w+)[`"]?"#).expect("sql index pattern")
});

pub(crate) struct QueryExtractor;

impl Extractor for QueryExtractor {
    fn extract(&self, source: &str) -> Extraction {
        let mut out = Extraction::default();

        for caps in FUNCTION.captures_iter(source).chain(PROCEDURE.captures_iter(source)) {
            let name = &caps[1];
            let params = normalize_params(&caps[2]);
            push_unique(&mut out.signatures, format!("{name}({params})"));
        }

        for caps in TABLE.captures_iter(source) {
            let full = caps.get(0).expect("whole match");
            let mut rendered = format!("table {}", &caps[1]);
            if let Some(pk) = PRIMARY_KEY.captures(body_window(source, full.end())) {
                rendered.push_str(&format!(" [pk: {}]", &pk[1]));
            }
            push_unique(&mut out.type_summaries, rendered);
        }
        for caps in VIEW.captures_iter(source) {
            push_unique(&mut out.type_summaries, format!("view {}", &caps[1]));
        }

        for caps in INDEX.captures_iter(source) {
            push_unique(&mut out.references, caps[1].to_string());
        }

        out
    }
}

/// Collapse whitespace runs in a parameter list onto one line
fn normalize_params(params: &str) -> String {
    params.split_whitespace().collect::<Vec<_>>().join(" ")
}
