use ps_core::ImportRecord;
use tree_sitter::Node;

use crate::visitor::walk::breadth_first;
use crate::visitor::VisitorContext;

/// Extract every import statement in the tree, at any depth.
pub(crate) fn extract_imports(ctx: &VisitorContext<'_>, root: Node<'_>) -> Vec<ImportRecord> {
    let mut imports = Vec::new();
    for node in breadth_first(root, |_| true) {
        match node.kind() {
            // import foo, import foo.bar, import numpy as np
            "import_statement" => extract_direct(ctx, node, &mut imports),
            // from foo import bar, baz / from . import x / from foo import *
            "import_from_statement" => {
                let module = node
                    .child_by_field_name("module_name")
                    .map(|m| module_path(ctx, m))
                    .unwrap_or_default();
                imports.push(extract_from(ctx, node, module));
            }
            "future_import_statement" => {
                let module = ModulePath {
                    level: 0,
                    dotted: "__future__".to_string(),
                };
                imports.push(extract_from(ctx, node, module));
            }
            _ => {}
        }
    }
    imports
}

fn extract_direct(ctx: &VisitorContext<'_>, node: Node<'_>, imports: &mut Vec<ImportRecord>) {
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        match name.kind() {
            "dotted_name" => {
                let module = dotted(ctx, name);
                imports.push(ImportRecord::direct(module.clone(), module));
            }
            "aliased_import" => {
                let (Some(orig), Some(alias)) = (
                    name.child_by_field_name("name"),
                    name.child_by_field_name("alias"),
                ) else {
                    continue;
                };
                imports.push(ImportRecord::direct(dotted(ctx, orig), ctx.node_text(alias)));
            }
            _ => {}
        }
    }
}

fn extract_from(ctx: &VisitorContext<'_>, node: Node<'_>, module: ModulePath) -> ImportRecord {
    let mut names = Vec::new();
    let mut bound = Vec::new();

    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        match name.kind() {
            "dotted_name" => {
                let text = dotted(ctx, name);
                bound.push(text.clone());
                names.push(text);
            }
            "aliased_import" => {
                let (Some(orig), Some(alias)) = (
                    name.child_by_field_name("name"),
                    name.child_by_field_name("alias"),
                ) else {
                    continue;
                };
                let alias = ctx.node_text(alias);
                bound.push(alias.to_string());
                names.push(format!("{} as {alias}", dotted(ctx, orig)));
            }
            _ => {}
        }
    }

    let mut cursor = node.walk();
    if node
        .named_children(&mut cursor)
        .any(|c| c.kind() == "wildcard_import")
    {
        names.push("*".to_string());
    }

    let package_relative = module.level > 0 && module.dotted.is_empty();
    let mut record = ImportRecord::from_names(module.render(), names);
    // `from . import x` binds the submodule `x` like a direct import would
    if package_relative && record.default_import.is_none() && bound.len() == 1 {
        record.default_import = bound.pop();
    }
    record
}

/// Module part of a from-import: relative level plus dotted name.
#[derive(Debug, Default, PartialEq)]
struct ModulePath {
    level: usize,
    dotted: String,
}

impl ModulePath {
    fn render(&self) -> String {
        format!("{}{}", ".".repeat(self.level), self.dotted)
    }
}

fn module_path(ctx: &VisitorContext<'_>, node: Node<'_>) -> ModulePath {
    match node.kind() {
        "relative_import" => {
            let mut path = ModulePath::default();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                match child.kind() {
                    "import_prefix" => {
                        path.level = ctx.node_text(child).matches('.').count();
                    }
                    "dotted_name" => path.dotted = dotted(ctx, child),
                    _ => {}
                }
            }
            path
        }
        _ => ModulePath {
            level: 0,
            dotted: dotted(ctx, node),
        },
    }
}

/// Dotted name with any whitespace around the dots removed.
fn dotted(ctx: &VisitorContext<'_>, node: Node<'_>) -> String {
    if node.kind() != "dotted_name" {
        return ctx.node_text(node).to_string();
    }
    let mut cursor = node.walk();
    let parts: Vec<&str> = node
        .named_children(&mut cursor)
        .map(|part| ctx.node_text(part))
        .collect();
    parts.join(".")
}
