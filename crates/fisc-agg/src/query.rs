//! Query surface consumed by presentation code.
//!
//! Thin wrappers over the flat and parent lookups. An id absent from the
//! tree is an explicit error, never a defaulted zero: callers must be able
//! to tell "category exists with total 0" apart from "category does not
//! exist in this scheme or year".

use fisc_domain::{AggregationNode, Amount, CategoryId};

use crate::error::{AggError, Result};
use crate::index::TreeIndex;
use crate::visit::flatten;

impl<'t> TreeIndex<'t> {
    /// Looks a node up by id.
    pub fn node(&self, id: &CategoryId) -> Option<&'t AggregationNode> {
        self.nodes.get(id).copied()
    }

    /// Total for the node with `id`.
    pub fn total_of(&self, id: &CategoryId) -> Result<Amount> {
        self.node(id)
            .map(|node| node.total)
            .ok_or_else(|| AggError::NodeNotFound(id.clone()))
    }

    /// Child ids of the node with `id`, in declared order.
    pub fn children_of(&self, id: &CategoryId) -> Result<Vec<&'t CategoryId>> {
        let node = self
            .node(id)
            .ok_or_else(|| AggError::NodeNotFound(id.clone()))?;
        Ok(node.children.iter().map(|child| &child.id).collect())
    }

    /// Parent of the node with `id`; `Ok(None)` for the root.
    pub fn parent_of(&self, id: &CategoryId) -> Result<Option<&'t AggregationNode>> {
        if !self.contains(id) {
            return Err(AggError::NodeNotFound(id.clone()));
        }
        Ok(self.parents.get(id).copied())
    }

    /// Every node in depth-first pre-order.
    pub fn all_nodes(&self) -> Vec<&'t AggregationNode> {
        flatten(self.root)
    }
}
