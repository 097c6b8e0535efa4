pub mod cosine;
pub mod jaccard;
pub mod lcs;
pub mod lsh;
pub mod ngram;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{config::SimilarityConfig, error::MetricError, metrics::lsh::MinHasher, utils::normalizer::tokenize};

/// The six similarity metrics, in report column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    CosineTfidf,
    CosineCount,
    Jaccard,
    Lcs,
    Lsh,
    NGram,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::CosineTfidf,
        Metric::CosineCount,
        Metric::Jaccard,
        Metric::Lcs,
        Metric::Lsh,
        Metric::NGram,
    ];

    /// Column name used in JSON, CSV and HTML reports
    pub fn column_name(self) -> &'static str {
        match self {
            Metric::CosineTfidf => "Cosine_TFIDF",
            Metric::CosineCount => "Cosine_Count",
            Metric::Jaccard => "Jaccard",
            Metric::Lcs => "LCS",
            Metric::Lsh => "LSH",
            Metric::NGram => "NGram",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Result of one metric on one pair, a score in `[0, 1]` or the failure
pub type MetricOutcome = Result<f64, MetricError>;

/// All six metrics with their parameters
///
/// Pure and shareable across worker threads: evaluating a pair touches no
/// shared mutable state.
#[derive(Debug, Clone)]
pub struct MetricSet {
    ngram_size: usize,
    lcs_max_cells: u64,
    minhasher: MinHasher,
}

impl Default for MetricSet {
    fn default() -> Self {
        Self::from_config(&SimilarityConfig::default())
    }
}

impl MetricSet {
    pub fn from_config(config: &SimilarityConfig) -> Self {
        Self {
            ngram_size: config.ngram_size,
            lcs_max_cells: config.lcs_max_cells,
            minhasher: MinHasher::new(config.minhash_permutations, config.shingle_size),
        }
    }

    /// Score one metric over two normalized texts
    pub fn score(&self, metric: Metric, text_a: &str, text_b: &str) -> MetricOutcome {
        self.score_tokens(metric, &tokenize(text_a), &tokenize(text_b))
    }

    /// Score one metric over two token sequences
    pub fn score_tokens(&self, metric: Metric, a: &[&str], b: &[&str]) -> MetricOutcome {
        let value = match metric {
            Metric::CosineTfidf => cosine::cosine_tfidf(a, b),
            Metric::CosineCount => cosine::cosine_count(a, b),
            Metric::Jaccard => jaccard::jaccard(a, b),
            Metric::Lcs => lcs::lcs_ratio(a, b, self.lcs_max_cells)?,
            Metric::Lsh => self.minhasher.similarity(a, b),
            Metric::NGram => ngram::ngram_overlap(a, b, self.ngram_size),
        };
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(MetricError::OutOfRange { metric, value });
        }
        Ok(value)
    }

    /// Evaluate every metric for one pair, in [`Metric::ALL`] order
    pub fn evaluate(&self, text_a: &str, text_b: &str) -> [(Metric, MetricOutcome); 6] {
        let a = tokenize(text_a);
        let b = tokenize(text_b);
        Metric::ALL.map(|metric| (metric, self.score_tokens(metric, &a, &b)))
    }
}
