use ps_core::{ClassRecord, PropertyRecord};
use tree_sitter::Node;

use crate::visitor::walk::breadth_first;
use crate::visitor::{extract_functions, line_span, VisitorContext, CLASS};

/// Extract every class definition in the tree, at any depth.
///
/// Class names are not filtered by visibility.
pub(crate) fn extract_classes(ctx: &VisitorContext<'_>, root: Node<'_>) -> Vec<ClassRecord> {
    breadth_first(root, |_| true)
        .into_iter()
        .filter(|n| n.kind() == CLASS)
        .filter_map(|n| extract_class(ctx, n))
        .collect()
}

fn extract_class(ctx: &VisitorContext<'_>, node: Node<'_>) -> Option<ClassRecord> {
    let name = ctx.name_of(node)?;
    if name.is_empty() {
        return None;
    }

    let methods = extract_functions(ctx, node, &format!("{name}."));
    let properties = node
        .child_by_field_name("body")
        .map(|body| extract_properties(ctx, body))
        .unwrap_or_default();
    let span = line_span(node);

    Some(ClassRecord {
        name: name.to_string(),
        methods,
        properties,
        line_start: span.start,
        line_end: span.end,
    })
}

/// Annotated assignments directly in the class body with a bare-name target.
fn extract_properties(ctx: &VisitorContext<'_>, body: Node<'_>) -> Vec<PropertyRecord> {
    let mut properties = Vec::new();
    let mut cursor = body.walk();
    for stmt in body.named_children(&mut cursor) {
        if stmt.kind() != "expression_statement" {
            continue;
        }
        let Some(assign) = stmt.named_child(0).filter(|n| n.kind() == "assignment") else {
            continue;
        };
        let Some(annotation) = assign.child_by_field_name("type") else {
            continue;
        };
        match assign.child_by_field_name("left") {
            Some(target) if target.kind() == "identifier" => properties.push(PropertyRecord {
                name: ctx.node_text(target).to_string(),
                type_name: ctx.node_text(annotation).to_string(),
                optional: assign.child_by_field_name("right").is_none(),
            }),
            _ => {}
        }
    }
    properties
}
