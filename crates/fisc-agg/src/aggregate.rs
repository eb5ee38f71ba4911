//! Recursive derivation of aggregation trees.

use fisc_domain::{
    AggregationNode, Amount, CategoryDef, ClassificationScheme, Dataset, LedgerRow,
};
use tracing::debug;

use crate::classifier;
use crate::error::{AggError, Result};
use crate::validate::{validate_scheme, ValidatedScheme};
use crate::visit::flatten;

/// A derived tree of totals plus bookkeeping about its derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationTree {
    /// Synthetic root carrying the scheme's root categories as children.
    /// Its id is the scheme id; its total is the sum of the root totals.
    pub root: AggregationNode,
    pub outcome: AggregateOutcome,
}

impl AggregationTree {
    /// Every node in depth-first pre-order.
    pub fn all_nodes(&self) -> Vec<&AggregationNode> {
        flatten(&self.root)
    }
}

/// What happened while deriving a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateOutcome {
    /// Rows matched by no root category. Excluded from every total, never
    /// an error: budget documents routinely carry codes outside the
    /// displayed taxonomy.
    pub unclassified_rows: usize,
    pub node_count: usize,
}

/// Derives the tree of totals for one dataset under one scheme.
///
/// Fails fast on a malformed scheme and never fails afterwards. Child
/// order follows the scheme's declared order, so legends and breadcrumbs
/// downstream stay stable across recomputations.
///
/// Each node's total is summed directly from the rows its own filter
/// matched, not from its children, so rows the child filters fail to
/// partition are absorbed at the parent rather than dropped. Under a fully
/// partitioning scheme the two are equal at every non-leaf.
pub fn aggregate(dataset: &Dataset, scheme: &ClassificationScheme) -> Result<AggregationTree> {
    let validated = validate_scheme(scheme)?;

    // The synthetic root reuses the scheme id, so no category may shadow it.
    if let Some(category) = scheme
        .categories
        .iter()
        .find(|category| category.id.as_str() == scheme.id.as_str())
    {
        return Err(AggError::DuplicateCategory(category.id.clone()));
    }

    let rows: Vec<&LedgerRow> = dataset.rows.iter().collect();

    let mut children = Vec::with_capacity(scheme.roots.len());
    for root_id in &scheme.roots {
        if let Some(category) = validated.category(root_id) {
            children.push(aggregate_category(category, &rows, &validated));
        }
    }

    let unclassified_rows = rows
        .iter()
        .filter(|row| {
            !scheme
                .roots
                .iter()
                .filter_map(|id| validated.category(id))
                .any(|category| classifier::row_matches(category, row))
        })
        .count();

    let total: Amount = children.iter().map(|child| child.total).sum();
    let root = AggregationNode {
        id: scheme.id.as_str().into(),
        label: scheme.label.clone(),
        total,
        children,
    };

    let outcome = AggregateOutcome {
        unclassified_rows,
        node_count: root.node_count(),
    };
    debug!(
        scheme = %scheme.id,
        exercice = dataset.exercice,
        nodes = outcome.node_count,
        unclassified = outcome.unclassified_rows,
        "aggregated dataset"
    );

    Ok(AggregationTree { root, outcome })
}

fn aggregate_category(
    category: &CategoryDef,
    rows: &[&LedgerRow],
    validated: &ValidatedScheme<'_>,
) -> AggregationNode {
    let matched = classifier::partition(category, rows);
    let total: Amount = matched.iter().map(|row| row.amount).sum();
    let children = category
        .children
        .iter()
        .filter_map(|id| validated.category(id))
        .map(|child| aggregate_category(child, &matched, validated))
        .collect();
    AggregationNode {
        id: category.id.clone(),
        label: category.label.clone(),
        total,
        children,
    }
}
