//! Depth-first traversal with enter and exit callbacks.

use crate::nodes::AstNode;

/// What the traversal should do after a visitor call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Descend into the node's children (on entry) or carry on (on exit).
    Continue,

    /// Do not visit the node's children.  The node itself is still exited.
    SkipChildren,

    /// End the whole walk right away.  No further calls are made.
    Stop,
}

/// Walks the tree under `root`, calling `visitor(node, true)` before a node's
/// children and `visitor(node, false)` after them.
///
/// Returning [`WalkStatus::SkipChildren`] on entry skips the subtree but not
/// the exit call; returning [`WalkStatus::Stop`] from either call ends the
/// walk and is passed back to the caller.  Errors from the visitor end the
/// walk too.
///
/// ```
/// # use mdlatex::{Arena, nodes::{AstNode, NodeValue}, walk::{walk, WalkStatus}};
/// let arena = Arena::new();
/// let root = arena.alloc(AstNode::from(NodeValue::Document));
/// root.append(arena.alloc(AstNode::from(NodeValue::Paragraph)));
///
/// let mut seen = vec![];
/// let status = walk(root, |node, entering| {
///     seen.push((node.data.kind_name(), entering));
///     Ok::<_, ()>(WalkStatus::Continue)
/// });
/// assert_eq!(status, Ok(WalkStatus::Continue));
/// assert_eq!(seen, [
///     ("document", true),
///     ("paragraph", true),
///     ("paragraph", false),
///     ("document", false),
/// ]);
/// ```
pub fn walk<'a, F, E>(root: &'a AstNode<'a>, mut visitor: F) -> Result<WalkStatus, E>
where
    F: FnMut(&'a AstNode<'a>, bool) -> Result<WalkStatus, E>,
{
    // Iterative so that deeply nested input cannot exhaust the call stack.
    // Each node is pushed once for its entry phase; the entry phase pushes
    // the exit phase back, followed by the children in reverse order.
    enum Phase {
        Pre,
        Post,
    }

    let mut stack = vec![(root, Phase::Pre)];

    while let Some((node, phase)) = stack.pop() {
        match phase {
            Phase::Pre => match visitor(node, true)? {
                WalkStatus::Stop => return Ok(WalkStatus::Stop),
                WalkStatus::SkipChildren => stack.push((node, Phase::Post)),
                WalkStatus::Continue => {
                    stack.push((node, Phase::Post));
                    for child in node.reverse_children() {
                        stack.push((child, Phase::Pre));
                    }
                }
            },
            Phase::Post => {
                if visitor(node, false)? == WalkStatus::Stop {
                    return Ok(WalkStatus::Stop);
                }
            }
        }
    }

    Ok(WalkStatus::Continue)
}
