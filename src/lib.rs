//! # csvquery
//!
//! CSV filtering & aggregation from the command line.
//!
//! Reads a CSV file into an in-memory table, optionally narrows it with
//! a single-column condition (`column=value`, `column>value`,
//! `column<value`), optionally reduces a numeric column with
//! `avg`/`min`/`max`, and prints the outcome as a grid-style text table.
//!
//! # Example
//!
//! ```no_run
//! use csvquery::pipeline::{self, RunOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let opts = RunOptions {
//!         file: "people.csv".into(),
//!         filter: Some("age>30".to_string()),
//!         aggregate: Some("salary=avg".to_string()),
//!     };
//!     pipeline::run(&opts)?;
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod pipeline;
pub mod query;
pub mod render;
