use ps_core::{is_public, ExportKind, ExportRecord};
use tree_sitter::Node;

use crate::visitor::walk::{breadth_first, enters_for_exports};
use crate::visitor::{VisitorContext, CLASS, FUNCTION};

/// List public function and class names.
///
/// Scoped walks report module-scope bindings only; legacy walks report
/// nested definitions as well.
pub(crate) fn extract_exports(ctx: &VisitorContext<'_>, root: Node<'_>) -> Vec<ExportRecord> {
    let mode = ctx.options.walk;
    breadth_first(root, |n| enters_for_exports(mode, n))
        .into_iter()
        .filter_map(|node| {
            let kind = match node.kind() {
                FUNCTION => ExportKind::Function,
                CLASS => ExportKind::Class,
                _ => return None,
            };
            let name = ctx.name_of(node)?;
            (!name.is_empty() && is_public(name)).then(|| ExportRecord {
                name: name.to_string(),
                kind,
            })
        })
        .collect()
}
