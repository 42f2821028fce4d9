use ast_grep_core::{Doc, Node};

use crate::types::{DeclKind, Declaration, Signature};

use super::helpers::{extract_parameters, extract_results, identifiers, line_of};

fn signature_of<D: Doc>(node: &Node<D>) -> Signature {
    let params = node
        .field("parameters")
        .map(|list| extract_parameters(&list))
        .unwrap_or_default();
    let result = node.field("result");
    Signature {
        params,
        results: extract_results(result.as_ref()),
    }
}

// ── function_declaration ──────────────────────────────────────────

pub(super) fn process_function<D: Doc>(node: &Node<D>) -> Option<Declaration> {
    let name = node.field("name").map(|n| n.text().to_string())?;
    Some(Declaration {
        kind: DeclKind::Function,
        name,
        line: line_of(node),
        signature: Some(signature_of(node)),
    })
}

// ── method_declaration ────────────────────────────────────────────

pub(super) fn process_method<D: Doc>(node: &Node<D>) -> Option<Declaration> {
    // Method name is a field_identifier; the receiver has its own field.
    let name = node.field("name").map(|n| n.text().to_string())?;
    Some(Declaration {
        kind: DeclKind::Method,
        name,
        line: line_of(node),
        signature: Some(signature_of(node)),
    })
}

// ── type_declaration ──────────────────────────────────────────────

pub(super) fn process_type_declaration<D: Doc>(node: &Node<D>) -> Vec<Declaration> {
    node.children()
        .filter(|c| matches!(c.kind().as_ref(), "type_spec" | "type_alias"))
        .filter_map(|spec| {
            let name = spec.field("name")?.text().to_string();
            Some(Declaration {
                kind: DeclKind::Type,
                name,
                line: line_of(&spec),
                signature: None,
            })
        })
        .collect()
}

// ── const_declaration / var_declaration ───────────────────────────

fn named_specs<D: Doc>(spec: &Node<D>, kind: DeclKind) -> Vec<Declaration> {
    let line = line_of(spec);
    identifiers(spec)
        .into_iter()
        .map(|name| Declaration {
            kind,
            name,
            line,
            signature: None,
        })
        .collect()
}

pub(super) fn process_const_declaration<D: Doc>(node: &Node<D>) -> Vec<Declaration> {
    node.children()
        .filter(|c| c.kind().as_ref() == "const_spec")
        .flat_map(|spec| named_specs(&spec, DeclKind::Const))
        .collect()
}

pub(super) fn process_var_declaration<D: Doc>(node: &Node<D>) -> Vec<Declaration> {
    let mut items = Vec::new();
    for child in node.children() {
        let k = child.kind();
        if k.as_ref() == "var_spec" {
            items.extend(named_specs(&child, DeclKind::Var));
        } else if k.as_ref() == "var_spec_list" {
            // var ( ... ) block
            for spec in child.children() {
                if spec.kind().as_ref() == "var_spec" {
                    items.extend(named_specs(&spec, DeclKind::Var));
                }
            }
        }
    }
    items
}
