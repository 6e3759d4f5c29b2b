use std::path::PathBuf;

/// Errors raised while reading a contact export.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open csv {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read csv record from {path}: {source}")]
    Record {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to assemble table from {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: polars::error::PolarsError,
    },
}
