//! Tests for Java/C# pattern extraction

use crate::extract::extractor_for;
use crate::scanner::Language;

fn extract(source: &str) -> crate::extract::Extraction {
    extractor_for(Language::Java).extract(source)
}

#[test]
fn test_class_with_extends_and_method_list() {
    let source = r#"
public class Dog extends Animal {
    private String name;

    public String bark(int times) {
        return "woof";
    }
}
"#;
    let out = extract(source);

    assert!(out
        .type_summaries
        .iter()
        .any(|t| t.starts_with("class Dog extends Animal")));
    assert!(out.signatures.contains(&"bark(int times)".to_string()));
}

#[test]
fn test_interface_declarations_are_type_summaries() {
    let source = "public interface Walker {\n    void walk();\n}\n";
    let out = extract(source);

    assert!(out.type_summaries.contains(&"interface Walker".to_string()));
}

#[test]
fn test_implements_clause_is_kept_when_there_is_no_extends() {
    let source = "public class Robot implements Walker, Talker {\n}\n";
    let out = extract(source);

    assert!(out
        .type_summaries
        .iter()
        .any(|t| t.starts_with("class Robot implements Walker")));
}

#[test]
fn test_java_imports_are_collected() {
    let source = "import java.util.List;\nimport static org.junit.Assert.assertTrue;\n";
    let out = extract(source);

    assert_eq!(
        out.references,
        vec!["java.util.List", "org.junit.Assert.assertTrue"]
    );
}

#[test]
fn test_csharp_using_directives_are_collected() {
    let source = "using System.Collections.Generic;\n\nnamespace App {\n    public class Service {\n    }\n}\n";
    let out = extractor_for(Language::CSharp).extract(source);

    assert_eq!(out.references, vec!["System.Collections.Generic"]);
    assert!(out
        .type_summaries
        .iter()
        .any(|t| t.starts_with("class Service")));
}

#[test]
fn test_control_flow_headers_are_not_methods() {
    let source = "public class App {\n    public void run() {\n        if (ready) {\n        }\n    }\n}\n";
    let out = extract(source);

    assert!(out.signatures.contains(&"run()".to_string()));
    assert!(!out.signatures.iter().any(|s| s.starts_with("if(")));
}
