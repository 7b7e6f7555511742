//! Tests for stylesheet pattern extraction

use crate::extract::extractor_for;
use crate::scanner::Language;

fn extract(source: &str) -> crate::extract::Extraction {
    extractor_for(Language::Css).extract(source)
}

#[test]
fn test_selector_kinds_land_in_their_slots() {
    let source = "body {\n  margin: 0;\n}\n.card {\n  padding: 8px;\n}\n#header {\n  color: red;\n}\n";
    let out = extract(source);

    assert!(out.signatures.contains(&"body".to_string()));
    assert!(out.type_summaries.contains(&"card".to_string()));
    assert!(out.references.contains(&"header".to_string()));
}

#[test]
fn test_at_rules_join_the_signatures_slot() {
    let source = "@media (max-width: 600px) {\n  .card { padding: 4px; }\n}\n@import url(\"extra.css\");\n";
    let out = extract(source);

    assert!(out.signatures.contains(&"@media".to_string()));
    assert!(out.signatures.contains(&"@import".to_string()));
}

#[test]
fn test_custom_properties_are_references() {
    let source = ":root {\n  --brand-color: #336699;\n  --spacing: 4px;\n}\n";
    let out = extract(source);

    assert!(out.references.contains(&"--brand-color".to_string()));
    assert!(out.references.contains(&"--spacing".to_string()));
}

#[test]
fn test_pseudo_class_selectors_are_kept() {
    let source = "a:hover {\n  color: blue;\n}\n";
    let out = extract(source);

    assert!(out.signatures.contains(&"a:hover".to_string()));
}
