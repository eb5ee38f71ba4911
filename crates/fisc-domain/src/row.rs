//! Raw budget document lines.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Whether a line records money coming in or going out.
///
/// Serialized as the single-letter code of the source documents (`R`/`D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "R")]
    Revenue,
    #[serde(rename = "D")]
    Expenditure,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Revenue => "Revenue",
            Direction::Expenditure => "Expenditure",
        };
        f.write_str(label)
    }
}

/// Operating vs. investment section of the budget.
///
/// Serialized as the single-letter code of the source documents (`F`/`I`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "F")]
    Operating,
    #[serde(rename = "I")]
    Investment,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Section::Operating => "Operating",
            Section::Investment => "Investment",
        };
        f.write_str(label)
    }
}

/// One raw accounting line: classification codes plus the realized amount.
///
/// Rows are immutable once read; the aggregation engine only ever sums them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub direction: Direction,
    pub section: Section,
    /// Functional classification code, e.g. `"R01"`.
    pub fonction: String,
    /// Nature (economic) classification code.
    pub nature: String,
    pub amount: Amount,
}

impl LedgerRow {
    pub fn new(
        direction: Direction,
        section: Section,
        fonction: impl Into<String>,
        nature: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            direction,
            section,
            fonction: fonction.into(),
            nature: nature.into(),
            amount,
        }
    }
}
