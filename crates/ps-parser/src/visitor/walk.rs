use std::collections::VecDeque;

use tree_sitter::Node;

use crate::options::WalkMode;
use crate::visitor::{CLASS, FUNCTION};

/// Wrapper nodes with no counterpart in Python's own syntax tree. Their
/// children are visited at the wrapper's depth.
const TRANSPARENT: [&str; 4] = ["block", "decorated_definition", "else_clause", "finally_clause"];

/// Breadth-first walk starting at `root`, parents before children and
/// siblings in source order.
///
/// `enter` decides whether the children of a visited node are queued; the
/// root is always entered. Transparent wrappers are never visited themselves.
pub(crate) fn breadth_first<'t>(root: Node<'t>, enter: impl Fn(Node<'t>) -> bool) -> Vec<Node<'t>> {
    let mut visited = Vec::new();
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        visited.push(node);
        if node != root && !enter(node) {
            continue;
        }
        queue_children(node, &mut queue);
    }

    visited
}

fn queue_children<'t>(node: Node<'t>, queue: &mut VecDeque<Node<'t>>) {
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
    for child in children {
        if TRANSPARENT.contains(&child.kind()) {
            queue_children(child, queue);
        } else {
            queue.push_back(child);
        }
    }
}

/// Whether a function walk looks inside `node`.
///
/// Scoped walks stop at class definitions so methods stay with their class.
pub(crate) fn enters_for_functions(mode: WalkMode, node: Node<'_>) -> bool {
    match mode {
        WalkMode::Legacy => true,
        WalkMode::Scoped => node.kind() != CLASS,
    }
}

/// Whether an export walk looks inside `node`.
///
/// Scoped walks stay at module scope: compound statements are entered,
/// function and class bodies are not.
pub(crate) fn enters_for_exports(mode: WalkMode, node: Node<'_>) -> bool {
    match mode {
        WalkMode::Legacy => true,
        WalkMode::Scoped => !matches!(node.kind(), FUNCTION | CLASS),
    }
}
