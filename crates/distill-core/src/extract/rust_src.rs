//! Structured extraction for Rust sources
//!
//! Rust is the primary language of the tool, so it gets a real parse tree
//! via `syn` instead of a pattern tier. The walk covers top-level items,
//! inline modules and impl blocks. A file that fails to parse yields an
//! empty extraction; that is expected behavior for malformed or generated
//! sources, not an error.

use quote::ToTokens;

use super::{push_unique, Extraction, Extractor, MAX_MEMBERS};

pub(crate) struct RustExtractor;

impl Extractor for RustExtractor {
    fn extract(&self, source: &str) -> Extraction {
        let Ok(file) = syn::parse_file(source) else {
            return Extraction::default();
        };
        let mut out = Extraction::default();
        collect_items(&file.items, &mut out);
        out
    }
}

fn collect_items(items: &[syn::Item], out: &mut Extraction) {
    for item in items {
        match item {
            syn::Item::Fn(func) => {
                let rendered = render_signature(&func.sig, &func.attrs, None);
                push_unique(&mut out.signatures, rendered);
            }
            syn::Item::Struct(item) => {
                push_unique(&mut out.type_summaries, render_struct(item));
            }
            syn::Item::Enum(item) => {
                push_unique(&mut out.type_summaries, render_enum(item));
            }
            syn::Item::Trait(item) => {
                push_unique(&mut out.type_summaries, render_trait(item));
            }
            syn::Item::Impl(item) => collect_impl(item, out),
            syn::Item::Use(item) => {
                let mut paths = Vec::new();
                flatten_use_tree(&item.tree, String::new(), &mut paths);
                for path in paths {
                    push_unique(&mut out.references, path);
                }
            }
            syn::Item::ExternCrate(item) => {
                push_unique(&mut out.references, item.ident.to_string());
            }
            syn::Item::Mod(module) => {
                if let Some((_, items)) = &module.content {
                    collect_items(items, out);
                }
            }
            _ => {}
        }
    }
}

fn collect_impl(item: &syn::ItemImpl, out: &mut Extraction) {
    let self_ty = type_string(&item.self_ty);
    for impl_item in &item.items {
        if let syn::ImplItem::Fn(method) = impl_item {
            let rendered = render_signature(&method.sig, &method.attrs, Some(&self_ty));
            push_unique(&mut out.signatures, rendered);
        }
    }
}

/// Compact rendering of a callable: attribute markers, owner-qualified
/// name, typed parameters, return type, first doc line
fn render_signature(
    sig: &syn::Signature,
    attrs: &[syn::Attribute],
    owner: Option<&str>,
) -> String {
    let mut rendered = String::new();
    for marker in attribute_markers(attrs) {
        rendered.push_str(&marker);
        rendered.push(' ');
    }
    if sig.asyncness.is_some() {
        rendered.push_str("async ");
    }
    match owner {
        Some(owner) => {
            rendered.push_str(owner);
            rendered.push_str("::");
        }
        None => rendered.push_str("fn "),
    }
    rendered.push_str(&sig.ident.to_string());
    rendered.push('(');
    rendered.push_str(&render_params(sig));
    rendered.push(')');
    if let syn::ReturnType::Type(_, ty) = &sig.output {
        rendered.push_str(" -> ");
        rendered.push_str(&type_string(ty));
    }
    if let Some(doc) = first_doc_line(attrs) {
        rendered.push_str(" /// ");
        rendered.push_str(&doc);
    }
    rendered
}

fn render_params(sig: &syn::Signature) -> String {
    let mut params = Vec::new();
    for input in &sig.inputs {
        match input {
            syn::FnArg::Receiver(receiver) => {
                let mut rendered = String::new();
                if receiver.reference.is_some() {
                    rendered.push('&');
                }
                if receiver.mutability.is_some() {
                    rendered.push_str("mut ");
                }
                rendered.push_str("self");
                params.push(rendered);
            }
            syn::FnArg::Typed(typed) => {
                let name = match typed.pat.as_ref() {
                    syn::Pat::Ident(ident) => ident.ident.to_string(),
                    _ => "_".to_string(),
                };
                params.push(format!("{name}: {}", type_string(&typed.ty)));
            }
        }
    }
    params.join(", ")
}

fn render_struct(item: &syn::ItemStruct) -> String {
    let fields: Vec<String> = match &item.fields {
        syn::Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|f| f.ident.as_ref().map(ToString::to_string))
            .take(MAX_MEMBERS)
            .collect(),
        _ => Vec::new(),
    };
    let mut rendered = format!("struct {}", item.ident);
    if !fields.is_empty() {
        rendered.push_str(&format!(" [fields: {}]", fields.join(", ")));
    }
    append_doc(&mut rendered, &item.attrs);
    rendered
}

fn render_enum(item: &syn::ItemEnum) -> String {
    let variants: Vec<String> = item
        .variants
        .iter()
        .map(|v| v.ident.to_string())
        .take(MAX_MEMBERS)
        .collect();
    let mut rendered = format!("enum {}", item.ident);
    if !variants.is_empty() {
        rendered.push_str(&format!(" [variants: {}]", variants.join(", ")));
    }
    append_doc(&mut rendered, &item.attrs);
    rendered
}

fn render_trait(item: &syn::ItemTrait) -> String {
    let mut rendered = format!("trait {}", item.ident);
    // One base reference: the first supertrait
    if let Some(syn::TypeParamBound::Trait(bound)) = item.supertraits.first() {
        rendered.push_str(": ");
        rendered.push_str(&path_string(&bound.path));
    }
    let methods: Vec<String> = item
        .items
        .iter()
        .filter_map(|i| match i {
            syn::TraitItem::Fn(method) => Some(method.sig.ident.to_string()),
            _ => None,
        })
        .take(MAX_MEMBERS)
        .collect();
    if !methods.is_empty() {
        rendered.push_str(&format!(" [methods: {}]", methods.join(", ")));
    }
    append_doc(&mut rendered, &item.attrs);
    rendered
}

/// Non-doc outer attributes rendered as prefixed markers, e.g. `#[must_use]`
fn attribute_markers(attrs: &[syn::Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("doc"))
        .map(|attr| format!("#[{}]", path_string(attr.path())))
        .collect()
}

/// First line of the doc comment, if any
fn first_doc_line(attrs: &[syn::Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let syn::Meta::NameValue(meta) = &attr.meta {
            if let syn::Expr::Lit(expr) = &meta.value {
                if let syn::Lit::Str(lit) = &expr.lit {
                    let text = lit.value();
                    let line = text.lines().next().unwrap_or("").trim().to_string();
                    if !line.is_empty() {
                        return Some(line);
                    }
                }
            }
        }
    }
    None
}

fn append_doc(rendered: &mut String, attrs: &[syn::Attribute]) {
    if let Some(doc) = first_doc_line(attrs) {
        rendered.push_str(" /// ");
        rendered.push_str(&doc);
    }
}

/// Flatten a use tree into full leaf paths; groups fan out, globs keep `*`
fn flatten_use_tree(tree: &syn::UseTree, prefix: String, out: &mut Vec<String>) {
    match tree {
        syn::UseTree::Path(path) => {
            flatten_use_tree(&path.tree, format!("{prefix}{}::", path.ident), out);
        }
        syn::UseTree::Name(name) => out.push(format!("{prefix}{}", name.ident)),
        syn::UseTree::Rename(rename) => out.push(format!("{prefix}{}", rename.ident)),
        syn::UseTree::Glob(_) => out.push(format!("{prefix}*")),
        syn::UseTree::Group(group) => {
            for item in &group.items {
                flatten_use_tree(item, prefix.clone(), out);
            }
        }
    }
}

fn path_string(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

/// Render a type through its token stream and tidy the spacing
fn type_string(ty: &syn::Type) -> String {
    tidy_tokens(&ty.to_token_stream().to_string())
}

/// Token streams print with spaces around every token; collapse the noisy
/// ones so types read like source
fn tidy_tokens(tokens: &str) -> String {
    tokens
        .replace(" :: ", "::")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
        .replace(" (", "(")
        .replace("( ", "(")
        .replace(" )", ")")
        .replace(" ;", ";")
}
