//! Derived aggregation trees.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::scheme::CategoryId;

/// A node in the derived tree of totals.
///
/// Nodes exclusively own their children, in the order the scheme declared
/// them. Back-references (child to parent) never live on the node itself;
/// they are a separate index in `fisc-agg`, so the tree stays a plain
/// acyclic ownership hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationNode {
    pub id: CategoryId,
    pub label: String,
    /// Sum of every row amount matched by this node's subtree filter.
    pub total: Amount,
    pub children: Vec<AggregationNode>,
}

impl AggregationNode {
    pub fn leaf(id: impl Into<CategoryId>, label: impl Into<String>, total: Amount) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            total,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Looks a direct child up by id.
    pub fn child(&self, id: &CategoryId) -> Option<&AggregationNode> {
        self.children.iter().find(|child| &child.id == id)
    }

    /// Number of nodes in this subtree, including the node itself.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(AggregationNode::node_count)
            .sum::<usize>()
    }
}
