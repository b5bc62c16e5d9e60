//! Row filtering against a parsed condition.

use polars::prelude::*;
use tracing::debug;

use crate::query::{CompareOp, Condition, QueryError};

/// Applies a single-column condition to a table.
pub struct RowFilter;

impl RowFilter {
    /// Filter `df` down to the rows matching `condition`.
    ///
    /// `=` compares the raw string cell against the condition value;
    /// `>`/`<` parse both sides as floats. Rows whose cell is missing,
    /// null or non-numeric are dropped, never an error. The result is a
    /// fresh DataFrame preserving input row order.
    pub fn apply(df: &DataFrame, condition: &str) -> Result<DataFrame, QueryError> {
        let cond = Condition::parse(condition)?;

        // A column absent from the file is absent for every row, so
        // nothing can match.
        let Ok(column) = df.column(&cond.column) else {
            return Ok(df.clear());
        };
        let cells = column.str()?;

        let mask: Vec<bool> = match cond.op {
            CompareOp::Eq => (0..df.height())
                .map(|i| cells.get(i) == Some(cond.value.as_str()))
                .collect(),
            CompareOp::Gt | CompareOp::Lt => {
                let Ok(rhs) = cond.value.parse::<f64>() else {
                    // Every per-row comparison would fail to coerce.
                    return Ok(df.clear());
                };
                (0..df.height())
                    .map(|i| {
                        cells
                            .get(i)
                            .and_then(|cell| cell.trim().parse::<f64>().ok())
                            .map(|lhs| match cond.op {
                                CompareOp::Gt => lhs > rhs,
                                _ => lhs < rhs,
                            })
                            .unwrap_or(false)
                    })
                    .collect()
            }
        };

        let mask = BooleanChunked::from_slice("mask".into(), &mask);
        let filtered = df.filter(&mask)?;
        debug!(
            kept = filtered.height(),
            total = df.height(),
            "applied condition '{}'",
            condition
        );
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        DataFrame::new(vec![
            Column::new("name".into(), vec!["Alice", "Bob", "Charlie"]),
            Column::new("age".into(), vec!["30", "40", "35"]),
            Column::new("salary".into(), vec!["5000", "6000", "7000"]),
        ])
        .unwrap()
    }

    fn names(df: &DataFrame) -> Vec<String> {
        let ca = df.column("name").unwrap().str().unwrap();
        (0..df.height())
            .map(|i| ca.get(i).unwrap().to_string())
            .collect()
    }

    #[test]
    fn equality_matches_raw_strings() {
        let result = RowFilter::apply(&sample(), "name=Alice").unwrap();
        assert_eq!(result.height(), 1);
        assert_eq!(names(&result), vec!["Alice"]);
    }

    #[test]
    fn greater_than_compares_numerically() {
        let result = RowFilter::apply(&sample(), "age>34").unwrap();
        assert_eq!(names(&result), vec!["Bob", "Charlie"]);
    }

    #[test]
    fn less_than_compares_numerically() {
        let result = RowFilter::apply(&sample(), "salary<6000").unwrap();
        assert_eq!(names(&result), vec!["Alice"]);
    }

    #[test]
    fn preserves_input_order() {
        let result = RowFilter::apply(&sample(), "age>0").unwrap();
        assert_eq!(names(&result), vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn non_numeric_cells_are_dropped_from_ordering() {
        let df = DataFrame::new(vec![
            Column::new("name".into(), vec!["Alice", "Bob"]),
            Column::new("age".into(), vec!["thirty", "40"]),
        ])
        .unwrap();

        let result = RowFilter::apply(&df, "age>0").unwrap();
        assert_eq!(names(&result), vec!["Bob"]);
    }

    #[test]
    fn missing_column_yields_empty_table() {
        let result = RowFilter::apply(&sample(), "height>150").unwrap();
        assert_eq!(result.height(), 0);
        assert_eq!(result.width(), sample().width());
    }

    #[test]
    fn non_numeric_condition_value_yields_empty_table() {
        let result = RowFilter::apply(&sample(), "age>abc").unwrap();
        assert_eq!(result.height(), 0);
    }

    #[test]
    fn equality_does_not_coerce_numbers() {
        // "40" == "40" as text, but "40.0" is a different string.
        let result = RowFilter::apply(&sample(), "age=40.0").unwrap();
        assert_eq!(result.height(), 0);
    }

    #[test]
    fn malformed_condition_is_an_error() {
        assert!(matches!(
            RowFilter::apply(&sample(), "nameAlice"),
            Err(QueryError::InvalidCondition(_))
        ));
    }

    #[test]
    fn input_table_is_untouched() {
        let df = sample();
        let _ = RowFilter::apply(&df, "salary<6000").unwrap();
        assert_eq!(df.height(), 3);
    }
}
