//! csvquery - CSV filtering & aggregation console tool.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use csvquery::pipeline::{self, RunOptions};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(version, about = "CSV processing: filtering and aggregation")]
struct Cli {
    /// Path to the CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Filter condition, e.g. `age>30` or `name=Alice`
    #[arg(long = "where", value_name = "CONDITION")]
    filter: Option<String>,

    /// Aggregation over a numeric column, e.g. `salary=avg` (avg/min/max)
    #[arg(long, value_name = "SPEC")]
    aggregate: Option<String>,
}

fn main() -> Result<()> {
    // Default to warnings only so the table output stays clean;
    // RUST_LOG overrides.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    let opts = RunOptions {
        file: cli.file,
        filter: cli.filter,
        aggregate: cli.aggregate,
    };

    pipeline::run(&opts)?;
    Ok(())
}
