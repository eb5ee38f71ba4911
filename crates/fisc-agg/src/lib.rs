//! fisc-agg
//!
//! Aggregation engine for public-accounting ledgers: classifies raw budget
//! lines against a declarative scheme, derives memoized trees of totals,
//! and serves id and parent lookups over them. Depends on fisc-domain.
//! No I/O, no terminal interaction.

pub mod aggregate;
pub mod cache;
pub mod classifier;
pub mod error;
pub mod index;
pub mod presets;
pub mod query;
pub mod validate;
pub mod visit;

pub use aggregate::{aggregate, AggregateOutcome, AggregationTree};
pub use cache::AggregationCache;
pub use error::{AggError, Result};
pub use index::TreeIndex;
pub use validate::{validate_scheme, ValidatedScheme};
pub use visit::{flatten, visit};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("fisc_agg=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
