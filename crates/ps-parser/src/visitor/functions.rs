use ps_core::{is_public, FunctionRecord};
use tree_sitter::Node;

use crate::visitor::signature::{build_parameters, is_async, return_type};
use crate::visitor::walk::{breadth_first, enters_for_functions};
use crate::visitor::{line_span, VisitorContext, FUNCTION};

/// Extract public function definitions below `root`.
///
/// `prefix` is prepended to every name (`"Point."` for methods). How deep
/// the walk goes is governed by the context's walk mode.
pub(crate) fn extract_functions(
    ctx: &VisitorContext<'_>,
    root: Node<'_>,
    prefix: &str,
) -> Vec<FunctionRecord> {
    let mode = ctx.options.walk;
    breadth_first(root, |n| enters_for_functions(mode, n))
        .into_iter()
        .filter(|n| n.kind() == FUNCTION)
        .filter_map(|n| extract_function(ctx, n, prefix))
        .collect()
}

fn extract_function(
    ctx: &VisitorContext<'_>,
    node: Node<'_>,
    prefix: &str,
) -> Option<FunctionRecord> {
    let name = ctx.name_of(node)?;
    if name.is_empty() || !is_public(name) {
        return None;
    }

    let parameters = node
        .child_by_field_name("parameters")
        .map(|p| build_parameters(ctx, p))
        .unwrap_or_default();
    let span = line_span(node);

    Some(FunctionRecord {
        name: format!("{prefix}{name}"),
        parameters,
        return_type: return_type(ctx, node).to_string(),
        is_async: is_async(node),
        line_start: span.start,
        line_end: span.end,
        body: ctx.lines(span),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::options::ExtractOptions;
    use crate::visitor::parse_tree;

    fn functions(source: &str, options: &ExtractOptions) -> Vec<FunctionRecord> {
        let tree = parse_tree(Path::new("t.py"), source).unwrap();
        let ctx = VisitorContext { source, options };
        extract_functions(&ctx, tree.root_node(), "")
    }

    fn names(funcs: &[FunctionRecord]) -> Vec<&str> {
        funcs.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn private_functions_are_skipped() {
        let funcs = functions(
            "def public():\n    pass\n\ndef _private():\n    pass\n\ndef __dunder__():\n    pass\n",
            &ExtractOptions::default(),
        );
        assert_eq!(names(&funcs), vec!["public"]);
    }

    #[test]
    fn body_is_exact_line_slice() {
        let source = "import os\n\nasync def fetch(url: str) -> bytes:\n    data = await get(url)\n    return data\n";
        let funcs = functions(source, &ExtractOptions::default());
        let f = &funcs[0];
        assert_eq!(f.line_start, 3);
        assert_eq!(f.line_end, 5);
        assert!(f.is_async);
        assert_eq!(f.return_type, "bytes");
        assert_eq!(
            f.body,
            "async def fetch(url: str) -> bytes:\n    data = await get(url)\n    return data"
        );
    }

    #[test]
    fn decorated_span_starts_at_def() {
        let source = "@cache\ndef load():\n    return 1\n";
        let funcs = functions(source, &ExtractOptions::default());
        assert_eq!(funcs[0].line_start, 2);
        assert_eq!(funcs[0].body, "def load():\n    return 1");
    }

    #[test]
    fn nested_functions_are_found() {
        let source = "def outer():\n    if True:\n        def inner():\n            pass\n    return inner\n";
        let funcs = functions(source, &ExtractOptions::default());
        assert_eq!(names(&funcs), vec!["outer", "inner"]);
    }

    #[test]
    fn scoped_mode_leaves_methods_to_classes() {
        let source = "class A:\n    def run(self):\n        pass\n\ndef main():\n    pass\n";
        let funcs = functions(source, &ExtractOptions::default());
        assert_eq!(names(&funcs), vec!["main"]);
    }

    #[test]
    fn legacy_mode_reports_methods_unprefixed() {
        let source = "class A:\n    def run(self):\n        pass\n\ndef main():\n    pass\n";
        let funcs = functions(source, &ExtractOptions::legacy());
        assert_eq!(names(&funcs), vec!["main", "run"]);
    }

    #[test]
    fn one_line_function() {
        let funcs = functions("def add(a, b=2): return a + b\n", &ExtractOptions::default());
        assert_eq!(funcs[0].line_start, 1);
        assert_eq!(funcs[0].line_end, 1);
        assert_eq!(funcs[0].body, "def add(a, b=2): return a + b");
    }
}
