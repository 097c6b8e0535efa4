/// This crate is a Document Similarity Engine.
/// It scores every pair of a document set on six lexical metrics and averages them.
pub mod config;
pub mod error;
pub mod utils;
pub mod vectorizer;
pub mod metrics;
pub mod document;
pub mod compare;
pub mod report;

/// Pairwise Comparator
/// The top-level struct of this crate.
/// It evaluates every unordered pair of a `DocumentSet` on a bounded worker pool
/// and returns a `ResultTable` in canonical pair order.
///
/// Pair `(i, j)` with `i < j` is reported in order
/// `(0,1), (0,2), ..., (0,n-1), (1,2), ...` no matter how many workers ran.
pub use compare::PairwiseComparator;

/// Compare raw texts, loaded inputs or files on disk in one call
pub use compare::{compare_inputs, compare_paths, compare_texts};

/// Result of one pair, and the ordered table of all pairs
///
/// # Serialization
/// Supported.
/// Field names follow the report columns (`Doc 1`, `Cosine_TFIDF`, ...).
pub use compare::aggregate::{PairResult, ResultTable};

/// Loaded documents and raw inputs
pub use document::{loader::DocumentLoader, Document, DocumentInput, DocumentSet};

/// PDF text extraction seam
/// Implement `PdfTextExtractor` to replace the default `lopdf` backend.
pub use document::pdf::{LopdfExtractor, PdfTextExtractor};

pub use metrics::{Metric, MetricSet};

pub use config::{ExtractionPolicy, SimilarityConfig};

pub use error::{ExtractionError, MetricError, SimilarityError};

/// Report output
/// JSON, CSV, HTML and CBOR renderings of a comparison.
pub use report::{ComparisonReport, ReportFormat};
