use thiserror::Error;

/// Errors raised while loading the price table.
///
/// Row numbers are 1-based data rows (the header is not counted).
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the file (bad quoting, ragged rows, ...).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: '{value}' is not a recognised date")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: '{value}' is not a valid price")]
    InvalidPrice { row: usize, value: String },

    /// Header present but no data rows, so there is no region to select.
    #[error("dataset contains no rows")]
    Empty,
}
