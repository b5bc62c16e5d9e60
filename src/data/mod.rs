//! Data module - CSV loading

mod loader;

pub use loader::{load_table, LoaderError};
