//! Tree walk that reduces every text value to its first token.

use crate::etree::Node;
use crate::text::first_token;

/// Counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Nodes visited, the root included.
    pub nodes: usize,
    /// Text and tail values that were shortened.
    pub truncated: usize,
}

/// Truncates the own text and tail of `root` and of every descendant to
/// their first token, in document order.
///
/// Uses an explicit stack, so nesting depth is bounded by memory rather
/// than by the call stack.
pub fn walk(root: &mut Node) -> WalkStats {
    let mut stats = WalkStats::default();
    let mut stack: Vec<&mut Node> = vec![root];

    while let Some(node) = stack.pop() {
        stats.nodes += 1;
        if keep_first_token(node.text_mut()) {
            stats.truncated += 1;
        }
        if keep_first_token(node.tail_mut()) {
            stats.truncated += 1;
        }
        if let Node::Element(el) = node {
            stack.extend(el.children.iter_mut().rev());
        }
    }

    stats
}

/// Replaces `value` with its first token; returns whether it changed.
fn keep_first_token(value: &mut String) -> bool {
    let token = first_token(Some(value.as_str()));
    if token.len() == value.len() {
        return false;
    }
    *value = token.to_owned();
    true
}
