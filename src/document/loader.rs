use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    config::{ExtractionPolicy, SimilarityConfig},
    document::{
        pdf::{join_pages, LopdfExtractor, PdfTextExtractor},
        Document, DocumentInput, DocumentSet, InputKind,
    },
    error::{ExtractionError, Result},
};

type LoadResult<T> = std::result::Result<T, ExtractionError>;
type LoadOutcome = LoadResult<Document>;

/// Turns raw inputs into normalized documents
///
/// The PDF collaborator is injected, so tests and embedders can swap it out.
pub struct DocumentLoader {
    extractor: Arc<dyn PdfTextExtractor>,
    pool: rayon::ThreadPool,
    policy: ExtractionPolicy,
}

impl DocumentLoader {
    /// Loader with the default `lopdf` extractor
    pub fn new(config: &SimilarityConfig) -> Result<Self> {
        Self::with_extractor(config, Arc::new(LopdfExtractor))
    }

    pub fn with_extractor(config: &SimilarityConfig, extractor: Arc<dyn PdfTextExtractor>) -> Result<Self> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.loader_workers)
            .thread_name(|i| format!("doc-loader-{i}"))
            .build()?;
        Ok(Self { extractor, pool, policy: config.extraction_policy })
    }

    /// Load one document
    ///
    /// # Errors
    /// `ExtractionError` when text bytes are not UTF-8 or the PDF cannot be read.
    pub fn load(&self, input: &DocumentInput) -> std::result::Result<Document, ExtractionError> {
        let raw = match input.kind {
            InputKind::Pdf => join_pages(self.extract_pages(input)?),
            InputKind::Text => std::str::from_utf8(&input.bytes)
                .map_err(|e| ExtractionError::InvalidUtf8 {
                    label: input.label.clone(),
                    valid_up_to: e.valid_up_to(),
                })?
                .to_string(),
        };
        debug!(document = %input.label, bytes = input.bytes.len(), "document loaded");
        Ok(Document::from_raw(input.label.clone(), &raw))
    }

    /// Run the PDF extractor, turning a panic inside it into an error for this document
    fn extract_pages(&self, input: &DocumentInput) -> LoadResult<Vec<Option<String>>> {
        let extractor = &self.extractor;
        panic::catch_unwind(AssertUnwindSafe(|| extractor.extract_pages(&input.label, &input.bytes)))
            .unwrap_or_else(|payload| {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                Err(ExtractionError::Pdf {
                    label: input.label.clone(),
                    reason: format!("extractor panicked: {reason}"),
                })
            })
    }

    /// Load every input concurrently, keeping input order
    ///
    /// Under `FailFast` the first failure in input order is returned. Under
    /// `Degrade` failed documents become empty and are listed in
    /// [`DocumentSet::degraded`].
    pub fn load_all(&self, inputs: &[DocumentInput]) -> Result<DocumentSet> {
        let start = Instant::now();
        let loaded: Vec<LoadOutcome> = self.pool.install(|| inputs.par_iter().map(|input| self.load(input)).collect());
        self.apply_policy(loaded, start)
    }

    /// Read and load files concurrently, keeping path order
    ///
    /// File reads happen on the loader pool, and a file that cannot be read is
    /// handled by the extraction policy like any other failed document.
    pub fn load_paths<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Result<DocumentSet> {
        let start = Instant::now();
        let loaded: Vec<LoadOutcome> = self.pool.install(|| {
            paths
                .par_iter()
                .map(|path| DocumentInput::from_path(path).and_then(|input| self.load(&input)))
                .collect()
        });
        self.apply_policy(loaded, start)
    }

    fn apply_policy(&self, loaded: Vec<LoadOutcome>, start: Instant) -> Result<DocumentSet> {
        let mut documents = Vec::with_capacity(loaded.len());
        let mut degraded = Vec::new();
        for result in loaded {
            match result {
                Ok(doc) => documents.push(doc),
                Err(e) => match self.policy {
                    ExtractionPolicy::FailFast => return Err(e.into()),
                    ExtractionPolicy::Degrade => {
                        warn!(document = e.label(), error = %e, "extraction failed, comparing as empty text");
                        degraded.push(e.label().to_string());
                        documents.push(Document::empty(e.label()));
                    }
                },
            }
        }
        info!(
            documents = documents.len(),
            degraded = degraded.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "documents loaded"
        );
        Ok(DocumentSet::with_degraded(documents, degraded))
    }
}
