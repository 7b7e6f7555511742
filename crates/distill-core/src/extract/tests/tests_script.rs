//! Tests for Python pattern extraction

use crate::extract::extractor_for;
use crate::scanner::Language;

fn extract(source: &str) -> crate::extract::Extraction {
    extractor_for(Language::Python).extract(source)
}

#[test]
fn test_def_with_params_and_return_annotation() {
    let source = "def greet(name: str, loud: bool = False) -> str:\n    return name\n";
    let out = extract(source);

    assert_eq!(
        out.signatures,
        vec!["def greet(name: str, loud: bool = False) -> str"]
    );
}

#[test]
fn test_async_def_and_methods_are_captured() {
    let source = "async def fetch(url):\n    pass\n\nclass Client:\n    def get(self):\n        pass\n";
    let out = extract(source);

    assert!(out.signatures.contains(&"def fetch(url)".to_string()));
    assert!(out.signatures.contains(&"def get(self)".to_string()));
}

#[test]
fn test_decorated_function_keeps_the_decorator_marker() {
    let source = "@staticmethod\ndef helper(x):\n    return x\n";
    let out = extract(source);

    assert_eq!(out.signatures, vec!["@staticmethod def helper(x)"]);
}

#[test]
fn test_class_with_base_and_method_list() {
    let source = r"
class Greeter(Base):
    def __init__(self, name):
        self.name = name

    def greet(self):
        return self.name
";
    let out = extract(source);

    assert_eq!(
        out.type_summaries,
        vec!["class Greeter(Base) [methods: __init__, greet]"]
    );
}

#[test]
fn test_decorated_class_keeps_the_decorator_marker() {
    let source = "@dataclass\nclass Point:\n    x: int\n    y: int\n";
    let out = extract(source);

    assert_eq!(out.type_summaries, vec!["@dataclass class Point"]);
}

#[test]
fn test_only_first_base_is_kept() {
    let source = "class Multi(First, Second, metaclass=Meta):\n    pass\n";
    let out = extract(source);

    assert_eq!(out.type_summaries, vec!["class Multi(First)"]);
}

#[test]
fn test_both_import_forms_are_collected() {
    let source = "import os\nimport os.path\nfrom typing import Optional\nfrom collections import abc\n";
    let out = extract(source);

    assert_eq!(out.references, vec!["os", "os.path", "typing", "collections"]);
}

#[test]
fn test_method_list_caps_at_five() {
    let source = "class Big:\n    def a(self): pass\n    def b(self): pass\n    def c(self): pass\n    def d(self): pass\n    def e(self): pass\n    def f(self): pass\n";
    let out = extract(source);

    assert_eq!(
        out.type_summaries,
        vec!["class Big [methods: a, b, c, d, e]"]
    );
}

#[test]
fn test_plain_text_yields_empty_extraction() {
    let out = extract("this is prose, not python\n");

    assert!(out.signatures.is_empty());
    assert!(out.type_summaries.is_empty());
    assert!(out.references.is_empty());
}
