//! Memoized aggregation keyed by dataset and scheme identity.

use std::collections::HashMap;
use std::sync::Arc;

use fisc_domain::{DatasetId, SchemeId};
use tracing::debug;

use crate::aggregate::AggregationTree;
use crate::error::Result;

/// Process-lifetime memo of derived trees.
///
/// Keys pair a dataset identity token with a scheme identity, so selecting
/// a year already seen is a lookup instead of a recomputation, while a
/// reloaded dataset (fresh token) misses as it must. There is deliberately
/// no eviction: key cardinality is the handful of fiscal years a deployment
/// loads. [`AggregationCache::clear`] exists for explicit invalidation.
#[derive(Debug, Default)]
pub struct AggregationCache {
    entries: HashMap<(DatasetId, SchemeId), Arc<AggregationTree>>,
}

impl AggregationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached tree for the key, computing and storing it on a
    /// miss.
    ///
    /// A failing computation propagates its error and leaves the cache
    /// untouched; no partial entry is retained.
    pub fn get_or_compute<F>(
        &mut self,
        dataset_id: DatasetId,
        scheme_id: &SchemeId,
        compute: F,
    ) -> Result<Arc<AggregationTree>>
    where
        F: FnOnce() -> Result<AggregationTree>,
    {
        let key = (dataset_id, scheme_id.clone());
        if let Some(tree) = self.entries.get(&key) {
            debug!(dataset = %dataset_id, scheme = %scheme_id, "aggregation cache hit");
            return Ok(Arc::clone(tree));
        }
        let tree = Arc::new(compute()?);
        debug!(dataset = %dataset_id, scheme = %scheme_id, "aggregation cache miss, stored");
        self.entries.insert(key, Arc::clone(&tree));
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached tree, e.g. after the underlying data changed on
    /// disk.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
