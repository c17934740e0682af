use ps_core::Parameter;
use tree_sitter::Node;

use crate::visitor::VisitorContext;

/// Conventional names bound to the instance or the class.
const RECEIVERS: [&str; 2] = ["self", "cls"];

/// A declared positional parameter before defaults are bound.
struct Declared<'a> {
    name: &'a str,
    annotation: &'a str,
}

/// One positional entry of a `parameters` or `lambda_parameters` node.
pub(crate) struct Positional<'t> {
    pub node: Node<'t>,
    pub name: Node<'t>,
    pub annotation: Option<Node<'t>>,
    pub default: Option<Node<'t>>,
}

/// Positional parameters in declaration order.
///
/// `*args`, a bare `*` and `**kwargs` end the positional run; the `/`
/// separator does not.
pub(crate) fn positional_params(params: Node<'_>) -> Vec<Positional<'_>> {
    let mut positional = Vec::new();
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => positional.push(Positional {
                node: child,
                name: child,
                annotation: None,
                default: None,
            }),
            "typed_parameter" => {
                // `*args: T` and `**kw: T` are typed too
                match child.named_child(0) {
                    Some(inner) if inner.kind() == "identifier" => positional.push(Positional {
                        node: child,
                        name: inner,
                        annotation: child.child_by_field_name("type"),
                        default: None,
                    }),
                    _ => break,
                }
            }
            "default_parameter" | "typed_default_parameter" => {
                let Some(name) = child.child_by_field_name("name") else {
                    continue;
                };
                positional.push(Positional {
                    node: child,
                    name,
                    annotation: child.child_by_field_name("type"),
                    default: child.child_by_field_name("value"),
                });
            }
            "list_splat_pattern" | "dictionary_splat_pattern" | "keyword_separator" => break,
            _ => {}
        }
    }
    positional
}

/// First positional parameter without a default that follows one with a
/// default, which Python rejects.
pub(crate) fn required_after_default(params: Node<'_>) -> Option<Node<'_>> {
    let mut seen_default = false;
    for param in positional_params(params) {
        if param.default.is_some() {
            seen_default = true;
        } else if seen_default {
            return Some(param.node);
        }
    }
    None
}

/// Build the public parameter list of a function's `parameters` node.
///
/// Only positional parameters are listed. Defaults bind to the rightmost
/// parameters, counting receivers, and receivers are dropped afterwards.
pub(crate) fn build_parameters(ctx: &VisitorContext<'_>, params: Node<'_>) -> Vec<Parameter> {
    let positional = positional_params(params);
    let declared: Vec<Declared<'_>> = positional
        .iter()
        .map(|p| Declared {
            name: ctx.node_text(p.name),
            annotation: p.annotation.map(|n| ctx.node_text(n)).unwrap_or(""),
        })
        .collect();
    let defaults: Vec<&str> = positional
        .iter()
        .filter_map(|p| p.default)
        .map(|n| ctx.node_text(n))
        .collect();

    bind_defaults(&declared, &defaults)
        .into_iter()
        .zip(&declared)
        .filter(|(_, decl)| !is_receiver(decl.name))
        .map(|(param, _)| param)
        .collect()
}

/// Align `defaults` with the trailing parameters of `declared`.
fn bind_defaults(declared: &[Declared<'_>], defaults: &[&str]) -> Vec<Parameter> {
    let first_default = declared.len().saturating_sub(defaults.len());
    declared
        .iter()
        .enumerate()
        .map(|(i, decl)| {
            let default_value = i
                .checked_sub(first_default)
                .and_then(|idx| defaults.get(idx))
                .map(|text| text.to_string());
            Parameter {
                name: decl.name.to_string(),
                type_name: decl.annotation.to_string(),
                optional: default_value.is_some(),
                default_value,
            }
        })
        .collect()
}

fn is_receiver(name: &str) -> bool {
    RECEIVERS.contains(&name)
}

fn field_text<'a>(ctx: &VisitorContext<'a>, node: Node<'_>, field: &str) -> &'a str {
    node.child_by_field_name(field)
        .map(|n| ctx.node_text(n))
        .unwrap_or("")
}

/// Return annotation text, empty when absent.
pub(crate) fn return_type<'a>(ctx: &VisitorContext<'a>, func: Node<'_>) -> &'a str {
    field_text(ctx, func, "return_type")
}

/// True for `async def`.
pub(crate) fn is_async(func: Node<'_>) -> bool {
    let mut cursor = func.walk();
    let found = func.children(&mut cursor).any(|c| c.kind() == "async");
    found
}
