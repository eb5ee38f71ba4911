//! fisc-domain
//!
//! Pure domain models (ledger rows, datasets, classification schemes,
//! aggregation trees). No I/O, no logging. Only data types.

pub mod amount;
pub mod dataset;
pub mod row;
pub mod scheme;
pub mod tree;

pub use amount::*;
pub use dataset::*;
pub use row::*;
pub use scheme::*;
pub use tree::*;
