use std::path::Path;

use ps_core::LineSpan;
use tree_sitter::{Node, Tree};

use crate::error::ParserError;
use crate::options::ExtractOptions;
use crate::visitor::signature::required_after_default;

mod classes;
mod exports;
mod functions;
mod imports;
mod signature;
mod walk;

pub(crate) use classes::extract_classes;
pub(crate) use exports::extract_exports;
pub(crate) use functions::extract_functions;
pub(crate) use imports::extract_imports;

pub(crate) const FUNCTION: &str = "function_definition";
pub(crate) const CLASS: &str = "class_definition";

/// Parse Python source into a tree-sitter tree.
///
/// Any ERROR or MISSING node is reported as `ParserError::Syntax` at the
/// position of the first one in document order. So are constructs the
/// grammar accepts but Python 3 rejects: `print`/`exec` statements and a
/// required parameter after a defaulted one.
pub(crate) fn parse_tree(path: &Path, source: &str) -> Result<Tree, ParserError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| ParserError::ParseFailed {
            path: path.to_path_buf(),
            reason: format!("failed to set language: {e}"),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParserError::ParseFailed {
            path: path.to_path_buf(),
            reason: "tree-sitter returned no tree".to_string(),
        })?;

    let root = tree.root_node();
    let rejected = first_syntax_error(root)
        .map(|bad| {
            let message = if bad.is_missing() {
                format!("expected '{}'", bad.kind())
            } else {
                "invalid syntax".to_string()
            };
            (bad, message)
        })
        .or_else(|| first_rejected_construct(root).map(|(bad, msg)| (bad, msg.to_string())));

    if let Some((bad, message)) = rejected {
        let pos = bad.start_position();
        return Err(ParserError::Syntax {
            path: path.to_path_buf(),
            message,
            line: pos.row + 1,
            column: pos.column + 1,
        });
    }

    Ok(tree)
}

fn first_syntax_error(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_syntax_error)
}

/// First node, in document order, that parses but is not valid Python 3.
fn first_rejected_construct(node: Node<'_>) -> Option<(Node<'_>, &'static str)> {
    match node.kind() {
        "print_statement" => return Some((node, "Missing parentheses in call to 'print'")),
        "exec_statement" => return Some((node, "Missing parentheses in call to 'exec'")),
        "parameters" | "lambda_parameters" => {
            if let Some(param) = required_after_default(node) {
                return Some((param, "non-default argument follows default argument"));
            }
        }
        _ => {}
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
    children.into_iter().find_map(first_rejected_construct)
}

/// Shared context passed to the extractors.
pub(crate) struct VisitorContext<'a> {
    pub source: &'a str,
    pub options: &'a ExtractOptions,
}

impl<'a> VisitorContext<'a> {
    /// Extract the text of a tree-sitter node from source.
    pub fn node_text(&self, node: Node<'_>) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// Text of the node's `name` field, if present.
    pub fn name_of(&self, node: Node<'_>) -> Option<&'a str> {
        node.child_by_field_name("name").map(|n| self.node_text(n))
    }

    /// Verbatim source lines covered by `span`.
    pub fn lines(&self, span: LineSpan) -> String {
        span.slice(self.source)
    }
}

/// Inclusive 1-based line span of a node.
///
/// Definitions end at their last code token, so trailing comments inside the
/// body are not counted. A node ending at column 0 stops on the previous
/// line. When no usable end line exists the span collapses to the start line.
pub(crate) fn line_span(node: Node<'_>) -> LineSpan {
    let start = node.start_position();
    let end = match node.kind() {
        FUNCTION | CLASS => last_code_descendant(node).end_position(),
        _ => node.end_position(),
    };
    let first = start.row + 1;
    let mut last = end.row + 1;
    if end.column == 0 && end.row > start.row {
        last -= 1;
    }
    if last < first {
        return LineSpan::single(first);
    }
    LineSpan::new(first, last)
}

/// Deepest last named descendant that is not a comment, or `node` itself.
fn last_code_descendant(node: Node<'_>) -> Node<'_> {
    let mut current = node;
    loop {
        let mut cursor = current.walk();
        let last = current
            .named_children(&mut cursor)
            .filter(|c| c.kind() != "comment")
            .last();
        match last {
            Some(child) => current = child,
            None => return current,
        }
    }
}
