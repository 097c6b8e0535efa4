pub mod aggregate;

use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    compare::aggregate::{enumerate_pairs, PairIndex, PairResult, ResultAggregator, ResultTable},
    config::SimilarityConfig,
    document::{loader::DocumentLoader, DocumentInput, DocumentSet},
    error::{Result, SimilarityError},
    metrics::MetricSet,
};

/// Pairwise comparison scheduler
///
/// Every unordered document pair is one task on a bounded rayon pool. Tasks
/// only read the shared `DocumentSet` and send their own result; the pool join
/// is the barrier before the aggregator hands back the canonical table.
pub struct PairwiseComparator {
    metrics: MetricSet,
    pool: rayon::ThreadPool,
}

impl PairwiseComparator {
    pub fn new(config: &SimilarityConfig) -> Result<Self> {
        config.validate()?;
        let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("pair-worker-{i}"));
        if let Some(workers) = config.workers {
            builder = builder.num_threads(workers);
        }
        Ok(Self {
            metrics: MetricSet::from_config(config),
            pool: builder.build()?,
        })
    }

    /// Number of worker threads
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Compare every pair of documents
    ///
    /// # Errors
    /// `InsufficientDocuments` when fewer than two documents are given.
    pub fn compare(&self, documents: &DocumentSet) -> Result<ResultTable> {
        documents.ensure_comparable()?;
        let start = Instant::now();
        let pairs = enumerate_pairs(documents.len());
        info!(documents = documents.len(), pairs = pairs.len(), workers = self.workers(), "comparison started");

        // 完了順で飛んでくる
        let (tx, rx) = mpsc::channel();
        self.pool.install(|| {
            pairs.par_iter().enumerate().for_each_with(tx, |tx, (position, &pair)| {
                let result = self.evaluate_pair(documents, pair);
                // receiver lives until after the join
                let _ = tx.send((position, result));
            });
        });

        let mut aggregator = ResultAggregator::new(pairs);
        for (position, result) in rx {
            aggregator.accept(position, result)?;
        }
        let table = aggregator.finish()?;
        info!(
            pairs = table.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "comparison finished"
        );
        Ok(table)
    }

    fn evaluate_pair(&self, documents: &DocumentSet, pair: PairIndex) -> PairResult {
        let (a, b) = (&documents[pair.i], &documents[pair.j]);
        let outcomes = self.metrics.evaluate(a.text(), b.text());
        for (metric, outcome) in &outcomes {
            if let Err(e) = outcome {
                warn!(doc1 = a.label(), doc2 = b.label(), %metric, error = %e, "metric failed, scoring 0");
            }
        }
        let result = PairResult::from_outcomes(a.label(), b.label(), &outcomes);
        debug!(doc1 = a.label(), doc2 = b.label(), average = result.average, "pair evaluated");
        result
    }
}

/// Compare raw texts
///
/// Labels default to `Doc_1`, `Doc_2`, ... when `labels` is `None`.
///
/// # Errors
/// `InvalidConfig` when the number of labels differs from the number of texts.
pub fn compare_texts<T: AsRef<str>>(
    texts: &[T],
    labels: Option<&[String]>,
    config: &SimilarityConfig,
) -> Result<ResultTable> {
    let documents = match labels {
        Some(labels) if labels.len() != texts.len() => {
            return Err(SimilarityError::InvalidConfig(format!(
                "{} labels given for {} texts",
                labels.len(),
                texts.len()
            )));
        }
        Some(labels) => DocumentSet::from_labeled_texts(labels.iter().cloned().zip(texts.iter().map(|t| t.as_ref()))),
        None => DocumentSet::from_texts(texts),
    };
    PairwiseComparator::new(config)?.compare(&documents)
}

/// Load raw inputs and compare them
///
/// Returns the loaded set alongside the table so callers can see labels and
/// degraded documents.
pub fn compare_inputs(inputs: &[DocumentInput], config: &SimilarityConfig) -> Result<(DocumentSet, ResultTable)> {
    let documents = DocumentLoader::new(config)?.load_all(inputs)?;
    documents.ensure_comparable()?;
    let table = PairwiseComparator::new(config)?.compare(&documents)?;
    Ok((documents, table))
}

/// Read files on the loader pool and compare them
///
/// Unreadable files go through the extraction policy, so under `Degrade`
/// they are compared as empty text.
pub fn compare_paths<P: AsRef<Path> + Sync>(
    paths: &[P],
    config: &SimilarityConfig,
) -> Result<(DocumentSet, ResultTable)> {
    let documents = DocumentLoader::new(config)?.load_paths(paths)?;
    documents.ensure_comparable()?;
    let table = PairwiseComparator::new(config)?.compare(&documents)?;
    Ok((documents, table))
}
