//! Row classification against a scheme's categories.
//!
//! Direct membership only: a row belongs to a category when the category's
//! filter accepts it. Transitive membership (a row belonging to a
//! category's descendants) is the aggregation recursion in
//! [`crate::aggregate`], which narrows the row set level by level.

use fisc_domain::{CategoryDef, LedgerRow};

/// Returns `true` when `row` belongs to `category` directly.
///
/// A category without a filter accepts every row its parent hands down.
pub fn row_matches(category: &CategoryDef, row: &LedgerRow) -> bool {
    match &category.filter {
        Some(filter) => filter.matches(row),
        None => true,
    }
}

/// Selects the subset of `rows` matching `category`, preserving order.
pub fn partition<'r>(category: &CategoryDef, rows: &[&'r LedgerRow]) -> Vec<&'r LedgerRow> {
    rows.iter()
        .copied()
        .filter(|row| row_matches(category, row))
        .collect()
}
