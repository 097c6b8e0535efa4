use std::path::PathBuf;

use thiserror::Error;

use crate::metrics::Metric;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, SimilarityError>;

/// Failure to obtain the text of a single document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The input could not be read from disk.
    #[error("failed to read {label}: {source}")]
    Io {
        label: String,
        #[source]
        source: std::io::Error,
    },

    /// A text input was not valid UTF-8.
    #[error("{label} is not valid UTF-8 text (invalid byte at offset {valid_up_to})")]
    InvalidUtf8 {
        label: String,
        valid_up_to: usize,
    },

    /// The PDF extractor rejected the whole document.
    #[error("failed to extract text from PDF {label}: {reason}")]
    Pdf {
        label: String,
        reason: String,
    },
}

impl ExtractionError {
    /// Label of the document that failed
    pub fn label(&self) -> &str {
        match self {
            ExtractionError::Io { label, .. }
            | ExtractionError::InvalidUtf8 { label, .. }
            | ExtractionError::Pdf { label, .. } => label,
        }
    }
}

/// Failure of one metric on one pair.
///
/// Never fatal: the scheduler records it as a 0.0 score for that metric.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    /// The pair is too large for the metric's work bound.
    #[error("{metric} input too large: {cells} cells exceeds limit {limit}")]
    InputTooLarge {
        metric: Metric,
        cells: u64,
        limit: u64,
    },

    /// The metric produced a value outside `[0, 1]` or a non-finite value.
    #[error("{metric} produced out-of-range score {value}")]
    OutOfRange {
        metric: Metric,
        value: f64,
    },
}

/// Errors surfaced to the caller of a comparison run.
#[derive(Debug, Error)]
pub enum SimilarityError {
    /// Fewer than two documents were supplied.
    #[error("at least 2 documents are required for comparison, got {found}")]
    InsufficientDocuments { found: usize },

    /// A document could not be loaded under the fail-fast policy.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// A configuration value is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A pair result was delivered twice.
    #[error("pair ({i}, {j}) was evaluated more than once")]
    DuplicatePair { i: usize, j: usize },

    /// A pair result never arrived before the join barrier.
    #[error("pair ({i}, {j}) produced no result")]
    MissingPair { i: usize, j: usize },

    /// The worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The config file could not be read.
    #[error("cannot read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for `SimilarityConfig`.
    #[error("cannot parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON report serialization failed.
    #[error("failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),

    /// CBOR report serialization failed.
    #[error("failed to encode CBOR report: {0}")]
    Cbor(#[from] serde_cbor::Error),

    /// CSV report serialization failed.
    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
