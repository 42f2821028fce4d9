use ast_grep_core::{Doc, Node};

use crate::error::ParserError;
use crate::types::{Parameter, TypeExpr};

const SNIPPET_CHARS: usize = 40;

pub(super) fn line_of<D: Doc>(node: &Node<D>) -> usize {
    node.start_pos().line() + 1
}

/// Reject trees containing `ERROR` or `MISSING` nodes.
///
/// tree-sitter recovers from malformed input instead of failing, so the
/// first recovery node found in document order is reported.
pub(super) fn check_syntax<D: Doc>(root: &Node<D>) -> Result<(), ParserError> {
    let Some(bad) = root.dfs().find(|n| n.is_error() || n.is_missing()) else {
        return Ok(());
    };

    let snippet = if bad.is_missing() {
        format!("missing `{}`", bad.kind())
    } else {
        let text = bad.text();
        let first_line = text.lines().next().unwrap_or_default().trim();
        if first_line.chars().count() > SNIPPET_CHARS {
            let cut: String = first_line.chars().take(SNIPPET_CHARS).collect();
            format!("unexpected `{cut}…`")
        } else {
            format!("unexpected `{first_line}`")
        }
    };

    Err(ParserError::Syntax {
        line: line_of(&bad),
        snippet,
    })
}

pub(super) fn package_name<D: Doc>(root: &Node<D>) -> Option<String> {
    root.children()
        .find(|c| c.kind().as_ref() == "package_clause")?
        .children()
        .find(|c| c.kind().as_ref() == "package_identifier")
        .map(|n| n.text().to_string())
}

/// Direct `identifier` children, which are the declared names in
/// parameter, const and var specs.
pub(super) fn identifiers<D: Doc>(node: &Node<D>) -> Vec<String> {
    node.children()
        .filter(|c| c.kind().as_ref() == "identifier")
        .map(|c| c.text().to_string())
        .collect()
}

fn first_named_child<'r, D: Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    node.children()
        .find(|c| c.is_named() && c.kind().as_ref() != "comment")
}

/// Map a type node onto the closed [`TypeExpr`] set.
///
/// Fixed-length arrays fold into slices. Qualified, generic, map, channel,
/// function, struct and interface types become [`TypeExpr::Other`].
pub(super) fn type_expr<D: Doc>(node: &Node<D>) -> TypeExpr {
    match node.kind().as_ref() {
        "type_identifier" => TypeExpr::named(node.text().to_string()),
        "slice_type" | "array_type" | "implicit_length_array_type" => node
            .field("element")
            .map_or(TypeExpr::Other, |elem| TypeExpr::slice_of(type_expr(&elem))),
        "pointer_type" => first_named_child(node)
            .map_or(TypeExpr::Other, |inner| TypeExpr::pointer_to(type_expr(&inner))),
        "parenthesized_type" => first_named_child(node).map_or(TypeExpr::Other, |inner| type_expr(&inner)),
        _ => TypeExpr::Other,
    }
}

/// Expand a `parameter_list` into one [`Parameter`] per declared name.
///
/// `a, b int` yields `(a, int)` then `(b, int)`. Declarations without names
/// (`func F(int)`) contribute nothing.
pub(super) fn extract_parameters<D: Doc>(list: &Node<D>) -> Vec<Parameter> {
    let mut params = Vec::new();
    for decl in list.children() {
        match decl.kind().as_ref() {
            "parameter_declaration" => {
                let Some(ty_node) = decl.field("type") else {
                    continue;
                };
                let ty = type_expr(&ty_node);
                for name in identifiers(&decl) {
                    params.push(Parameter::new(name, ty.clone()));
                }
            }
            "variadic_parameter_declaration" => {
                let ty = decl
                    .field("type")
                    .map_or(TypeExpr::Other, |n| type_expr(&n));
                if let Some(name) = decl.field("name") {
                    params.push(Parameter::variadic(name.text().to_string(), ty));
                }
            }
            _ => {}
        }
    }
    params
}

/// Result types in order. Named groups contribute one entry per name.
pub(super) fn extract_results<D: Doc>(result: Option<&Node<D>>) -> Vec<TypeExpr> {
    let Some(result) = result else {
        return Vec::new();
    };
    if result.kind().as_ref() != "parameter_list" {
        return vec![type_expr(result)];
    }

    let mut results = Vec::new();
    for decl in result.children() {
        if decl.kind().as_ref() != "parameter_declaration" {
            continue;
        }
        let Some(ty_node) = decl.field("type") else {
            continue;
        };
        let ty = type_expr(&ty_node);
        let count = identifiers(&decl).len().max(1);
        results.extend(std::iter::repeat_n(ty, count));
    }
    results
}
