//! Query module - condition parsing, row filtering and aggregation

use polars::prelude::PolarsError;
use thiserror::Error;

mod aggregate;
mod condition;
mod filter;

pub use aggregate::{AggregateFn, AggregateResult, AggregateSpec, Aggregator};
pub use condition::{CompareOp, Condition};
pub use filter::RowFilter;

/// Error type shared by the query components
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid condition '{0}'")]
    InvalidCondition(String),

    #[error("invalid aggregation '{0}'")]
    InvalidAggregation(String),

    #[error("unknown aggregation function '{0}'")]
    UnknownFunction(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}
