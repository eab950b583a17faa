//! Errors raised while loading the datasets.

/// Fatal dataset problem detected at startup.
///
/// `source_name` is the file path (or a label for in-memory readers).
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("cannot open dataset {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {source_name} is missing required column '{column}'")]
    MissingColumn { source_name: String, column: String },

    #[error("dataset {source_name}, line {line}: invalid {column} value '{value}'")]
    InvalidValue {
        source_name: String,
        line: u64,
        column: String,
        value: String,
    },

    #[error("dataset {source_name} lists institution '{name}' more than once")]
    DuplicateInstitution { source_name: String, name: String },
}
