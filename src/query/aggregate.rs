//! Column aggregation (avg/min/max) over the numeric cells of a table.

use polars::prelude::*;

use crate::query::QueryError;

/// Aggregation functions over a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFn {
    /// Arithmetic mean
    Avg,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
}

impl AggregateFn {
    /// Lower-case token as it appears in an aggregation expression.
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFn::Avg => "avg",
            AggregateFn::Min => "min",
            AggregateFn::Max => "max",
        }
    }
}

/// A parsed aggregation expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    pub column: String,
    pub func: AggregateFn,
}

impl AggregateSpec {
    /// Parse an expression of the form `column=function`.
    ///
    /// The function name is case-folded; anything other than
    /// `avg`/`min`/`max` is a usage error.
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let parts: Vec<&str> = input.split('=').collect();
        if parts.len() != 2 {
            return Err(QueryError::InvalidAggregation(input.to_string()));
        }

        let column = parts[0].trim().to_string();
        let func = match parts[1].trim().to_lowercase().as_str() {
            "avg" => AggregateFn::Avg,
            "min" => AggregateFn::Min,
            "max" => AggregateFn::Max,
            other => return Err(QueryError::UnknownFunction(other.to_string())),
        };

        Ok(AggregateSpec { column, func })
    }
}

/// Computed aggregation outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub column: String,
    pub func: AggregateFn,
    pub value: f64,
}

/// Computes an aggregation over a table.
pub struct Aggregator;

impl Aggregator {
    /// Parse `raw_spec` and reduce the named column.
    ///
    /// Returns `Ok(None)` when no row yields a numeric value for the
    /// column (including the column being absent entirely), which the
    /// caller reports as a no-data condition rather than an error.
    pub fn run(df: &DataFrame, raw_spec: &str) -> Result<Option<AggregateResult>, QueryError> {
        let spec = AggregateSpec::parse(raw_spec)?;
        let values = Self::numeric_values(df, &spec.column)?;
        if values.is_empty() {
            return Ok(None);
        }

        let value = match spec.func {
            AggregateFn::Avg => values.iter().sum::<f64>() / values.len() as f64,
            AggregateFn::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            AggregateFn::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        };

        Ok(Some(AggregateResult {
            column: spec.column,
            func: spec.func,
            value,
        }))
    }

    /// Collect the column's cells that parse as numbers, keeping input
    /// order. Missing column, null cells and non-numeric text are
    /// skipped.
    fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, QueryError> {
        let Ok(column) = df.column(column) else {
            return Ok(Vec::new());
        };
        let cells = column.str()?;

        let values = (0..df.height())
            .filter_map(|i| cells.get(i))
            .filter_map(|cell| cell.trim().parse::<f64>().ok())
            .collect();
        Ok(values)
    }
}
