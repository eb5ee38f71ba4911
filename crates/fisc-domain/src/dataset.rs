//! Per-year datasets and their identity tokens.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::row::LedgerRow;

/// Identity token for a loaded dataset.
///
/// Minted once per construction. Two loads of the same fiscal year are
/// distinct datasets as far as memoization is concerned; the token replaces
/// the object-reference identity a garbage-collected runtime would rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(Uuid);

impl DatasetId {
    pub fn new() -> Self {
        DatasetId(Uuid::new_v4())
    }
}

impl Default for DatasetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The full row set of one fiscal year's budget document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: DatasetId,
    /// Fiscal year the rows were executed in.
    pub exercice: u16,
    pub loaded_at: DateTime<Utc>,
    pub rows: Vec<LedgerRow>,
}

impl Dataset {
    pub fn new(exercice: u16, rows: Vec<LedgerRow>) -> Self {
        Self {
            id: DatasetId::new(),
            exercice,
            loaded_at: Utc::now(),
            rows,
        }
    }
}
