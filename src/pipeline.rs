//! Pipeline orchestration: load -> filter -> aggregate -> present.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::data::{self, LoaderError};
use crate::query::{Aggregator, QueryError, RowFilter};
use crate::render;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// One invocation of the tool.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub file: PathBuf,
    /// Raw `--where` expression; `None` or empty means no filtering.
    pub filter: Option<String>,
    /// Raw `--aggregate` expression; `None` or empty means full display.
    pub aggregate: Option<String>,
}

/// Run the whole pipeline, printing the outcome to stdout.
///
/// Empty-result cases are not failures: a notice goes to stderr and the
/// run still succeeds. Everything fatal comes back as an error value
/// for the caller to turn into an exit status.
pub fn run(opts: &RunOptions) -> Result<(), PipelineError> {
    let mut table = data::load_table(&opts.file)?;

    if let Some(condition) = opts.filter.as_deref().filter(|c| !c.is_empty()) {
        table = RowFilter::apply(&table, condition)?;
    }

    if let Some(spec) = opts.aggregate.as_deref().filter(|s| !s.is_empty()) {
        match Aggregator::run(&table, spec)? {
            Some(result) => {
                debug!(value = result.value, "aggregation complete");
                println!("Aggregation '{spec}':");
                print!("{}", render::aggregate_table(&result));
            }
            None => eprintln!("no data to aggregate"),
        }
        return Ok(());
    }

    if table.is_empty() {
        eprintln!("no data to display");
        return Ok(());
    }
    print!("{}", render::data_table(&table));
    Ok(())
}
