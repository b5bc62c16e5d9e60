//! CSV Table Loader Module
//! Reads a delimited text file into an in-memory table using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read file: {0}")]
    Read(#[from] PolarsError),
}

/// Load a CSV file into a DataFrame.
///
/// Schema inference is disabled so every column comes back as a string
/// column and each cell keeps the raw text from the file. The first
/// line is the header row defining column names. An empty file yields
/// an empty table rather than an error.
pub fn load_table(path: &Path) -> Result<DataFrame, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::NotFound(path.to_path_buf()));
    }

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(0))
        .with_ignore_errors(true)
        .with_raise_if_empty(false)
        .finish()?
        .collect()?;

    debug!(
        rows = df.height(),
        columns = df.width(),
        "loaded {}",
        path.display()
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_all_columns_as_strings() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "name,age\nAlice,30\nBob,40\n").unwrap();

        let df = load_table(tmp.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.get_column_names_str(), &["name", "age"]);
        for column in df.get_columns() {
            assert_eq!(column.dtype(), &DataType::String);
        }
    }

    #[test]
    fn missing_file_is_classified() {
        let err = load_table(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
    }

    #[test]
    fn header_only_file_yields_empty_table() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "name,age\n").unwrap();

        let df = load_table(tmp.path()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.get_column_names_str(), &["name", "age"]);
    }
}
