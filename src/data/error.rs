use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between the input file and a finished chart.
///
/// Load failures (`Load`, `Csv`, `Json`, `Malformed`, `UnsupportedFormat`,
/// `MissingColumn`)
/// abort before any chart is built. `Parse` and `InvalidInput` abort the chart
/// build that hit them.
#[derive(Debug, Error)]
pub enum DataError {
    /// A field that should hold a number does not.
    #[error("'{text}' is not a valid number")]
    Parse { text: String },

    /// Wraps an error with the data row (1-based) and column it came from.
    #[error("row {row}, column '{column}'")]
    Field {
        row: usize,
        column: String,
        #[source]
        source: Box<DataError>,
    },

    /// Input that cannot be summarized or charted, e.g. an empty group.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("input is missing required column '{0}'")]
    MissingColumn(String),

    #[error("failed to read {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON")]
    Json(#[from] serde_json::Error),

    /// Well-formed text with the wrong shape, e.g. JSON that is not an
    /// array of records.
    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}

impl DataError {
    /// Attach row/column context to an error raised while reading one field.
    pub fn at(self, row: usize, column: &str) -> Self {
        DataError::Field {
            row,
            column: column.to_string(),
            source: Box::new(self),
        }
    }

    /// The underlying error with any row/column context stripped.
    #[cfg(test)]
    pub fn root(&self) -> &DataError {
        match self {
            DataError::Field { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
