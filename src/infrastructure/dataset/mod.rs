//! Dataset loading.
//!
//! The pantry and institution tables are read once at startup by
//! [`CsvDataSource`] and validated into typed records; any schema problem is
//! a fatal [`DataLoadError`].

mod csv_source;
mod error;

pub use csv_source::{CsvDataSource, read_institutions, read_pantries};
pub use error::DataLoadError;
