//! Depth-first traversal over aggregation trees.

use fisc_domain::AggregationNode;

/// Applies `callback` to every node in depth-first pre-order.
///
/// The tree is never mutated; the callback may carry external side effects
/// (the index builder does) but receives shared references only.
pub fn visit<'t, F>(node: &'t AggregationNode, callback: &mut F)
where
    F: FnMut(&'t AggregationNode),
{
    callback(node);
    for child in &node.children {
        visit(child, callback);
    }
}

/// Materializes every node of the tree in depth-first pre-order.
pub fn flatten(node: &AggregationNode) -> Vec<&AggregationNode> {
    let mut nodes = Vec::new();
    visit(node, &mut |visited| nodes.push(visited));
    nodes
}
