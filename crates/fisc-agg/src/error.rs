use fisc_domain::CategoryId;
use thiserror::Error;

/// Unified error type for the aggregation engine and its storage edge.
///
/// Scheme-structure variants are raised before any aggregation recursion
/// runs; `NodeNotFound` is a caller error on the query surface. Rows that
/// match no category are deliberately *not* an error (see
/// [`crate::aggregate::AggregateOutcome`]).
#[derive(Debug, Error)]
pub enum AggError {
    #[error("category `{0}` is defined more than once in the scheme")]
    DuplicateCategory(CategoryId),
    #[error("category `{0}` is referenced but not defined in the scheme")]
    UnknownCategory(CategoryId),
    #[error("category `{0}` is declared under more than one parent")]
    DuplicateParentage(CategoryId),
    #[error("category `{0}` is part of a cycle in the scheme")]
    SchemeCycle(CategoryId),
    #[error("no node `{0}` in this aggregation tree")]
    NodeNotFound(CategoryId),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
}

pub type Result<T> = std::result::Result<T, AggError>;

impl From<std::io::Error> for AggError {
    fn from(err: std::io::Error) -> Self {
        AggError::Storage(err.to_string())
    }
}
