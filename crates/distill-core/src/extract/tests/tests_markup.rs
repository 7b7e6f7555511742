//! Tests for HTML pattern extraction

use crate::extract::extractor_for;
use crate::scanner::Language;

fn extract(source: &str) -> crate::extract::Extraction {
    extractor_for(Language::Html).extract(source)
}

#[test]
fn test_ids_land_in_the_signatures_slot() {
    let source = "<div id=\"header\"><span id=\"logo\"></span></div>\n";
    let out = extract(source);

    assert_eq!(out.signatures, vec!["header", "logo"]);
}

#[test]
fn test_class_names_are_split_into_the_types_slot() {
    let source = "<div class=\"card shadow large\"><p class=\"card\"></p></div>\n";
    let out = extract(source);

    assert_eq!(out.type_summaries, vec!["card", "shadow", "large"]);
}

#[test]
fn test_event_handlers_join_the_signatures_slot() {
    let source = "<button id=\"go\" onclick=\"run()\" onmouseover=\"hint()\">Go</button>\n";
    let out = extract(source);

    assert_eq!(out.signatures, vec!["go", "onclick", "onmouseover"]);
}

#[test]
fn test_script_and_link_targets_are_references() {
    let source = "<script src=\"app.js\"></script>\n<link rel=\"stylesheet\" href=\"main.css\">\n";
    let out = extract(source);

    assert_eq!(out.references, vec!["app.js", "main.css"]);
}
