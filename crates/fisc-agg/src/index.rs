//! Id and parent lookups derived from a tree.

use std::collections::HashMap;

use fisc_domain::{AggregationNode, CategoryId};

use crate::visit::visit;

/// One-pass lookup structures over a tree it borrows.
///
/// The flat map answers "find the node with this id"; the parent map
/// answers "find this node's parent" without the nodes themselves holding
/// back-pointers. Borrowing rather than owning keeps the index honest: it
/// cannot outlive its tree, cannot mutate it, and the child-to-parent
/// direction can never close an ownership cycle with the tree's
/// parent-to-child direction.
#[derive(Debug)]
pub struct TreeIndex<'t> {
    pub(crate) root: &'t AggregationNode,
    pub(crate) nodes: HashMap<&'t CategoryId, &'t AggregationNode>,
    pub(crate) parents: HashMap<&'t CategoryId, &'t AggregationNode>,
}

impl<'t> TreeIndex<'t> {
    /// Builds both lookups in a single pre-order pass.
    ///
    /// Cannot fail: trees produced by the aggregator are acyclic by
    /// construction and carry scheme-unique ids.
    pub fn build(root: &'t AggregationNode) -> Self {
        let mut nodes = HashMap::new();
        let mut parents = HashMap::new();
        visit(root, &mut |node| {
            nodes.insert(&node.id, node);
            for child in &node.children {
                parents.insert(&child.id, node);
            }
        });
        Self {
            root,
            nodes,
            parents,
        }
    }

    pub fn root(&self) -> &'t AggregationNode {
        self.root
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.nodes.contains_key(id)
    }
}
