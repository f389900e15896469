//! Depth-first tree walk with enter/exit callbacks.

use crate::ast::{Node, NodeKind};

/// What the walker does after a node has been entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkStatus {
    /// Visit the children, then call [`Visitor::exit`].
    Continue,
    /// Skip the children and the exit call.
    SkipChildren,
}

/// Position of a node in the tree, as seen by the visitor.
#[derive(Clone, Copy, Debug, Default)]
pub struct WalkContext<'a> {
    /// Kind of the parent node; `None` at the root.
    pub parent: Option<&'a NodeKind>,
    /// Number of ancestor list nodes.
    pub list_depth: usize,
    /// Whether the nearest ancestor list is ordered.
    pub ordered_list: bool,
}

impl<'a> WalkContext<'a> {
    /// Context for the children of `node`.
    #[must_use]
    pub fn descend(self, node: &'a Node) -> Self {
        let (list_depth, ordered_list) = match node.kind {
            NodeKind::List { ordered, .. } => (self.list_depth + 1, ordered),
            _ => (self.list_depth, self.ordered_list),
        };
        Self {
            parent: Some(&node.kind),
            list_depth,
            ordered_list,
        }
    }

    /// Whether the parent node has the given discriminant.
    #[must_use]
    pub fn parent_is(&self, predicate: fn(&NodeKind) -> bool) -> bool {
        self.parent.is_some_and(predicate)
    }
}

/// Callbacks fired while walking a node tree.
pub trait Visitor {
    type Error;

    /// Called when a node is first reached.
    fn enter(&mut self, node: &Node, ctx: &WalkContext<'_>) -> Result<WalkStatus, Self::Error>;

    /// Called after all children of a node have been visited.
    fn exit(&mut self, node: &Node, ctx: &WalkContext<'_>) -> Result<(), Self::Error>;
}

/// Walk `root` and its descendants in pre/post order.
///
/// Stops at the first error returned by the visitor.
pub fn walk<V: Visitor>(root: &Node, visitor: &mut V) -> Result<(), V::Error> {
    walk_node(root, visitor, WalkContext::default())
}

/// Walk the children of `node`, as if `node` itself had just been entered
/// with context `ctx`.
pub fn walk_children<'a, V: Visitor>(
    node: &'a Node,
    visitor: &mut V,
    ctx: WalkContext<'a>,
) -> Result<(), V::Error> {
    let child_ctx = ctx.descend(node);
    for child in &node.children {
        walk_node(child, visitor, child_ctx)?;
    }
    Ok(())
}

fn walk_node<'a, V: Visitor>(
    node: &'a Node,
    visitor: &mut V,
    ctx: WalkContext<'a>,
) -> Result<(), V::Error> {
    if visitor.enter(node, &ctx)? == WalkStatus::SkipChildren {
        return Ok(());
    }
    walk_children(node, visitor, ctx)?;
    visitor.exit(node, &ctx)
}
