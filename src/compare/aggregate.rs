use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SimilarityError},
    metrics::{Metric, MetricOutcome},
};

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Unordered pair `{i, j}` with `i < j`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairIndex {
    pub i: usize,
    pub j: usize,
}

/// All pairs of `n` documents in canonical order:
/// for i in 0..n-1, for j in i+1..n
pub fn enumerate_pairs(n: usize) -> Vec<PairIndex> {
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push(PairIndex { i, j });
        }
    }
    pairs
}

/// Scores of one document pair, as percentages rounded to 2 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    #[serde(rename = "Doc 1")]
    pub doc1: String,
    #[serde(rename = "Doc 2")]
    pub doc2: String,
    #[serde(rename = "Cosine_TFIDF")]
    pub cosine_tfidf: f64,
    #[serde(rename = "Cosine_Count")]
    pub cosine_count: f64,
    #[serde(rename = "Jaccard")]
    pub jaccard: f64,
    #[serde(rename = "LCS")]
    pub lcs: f64,
    #[serde(rename = "LSH")]
    pub lsh: f64,
    #[serde(rename = "NGram")]
    pub ngram: f64,
    #[serde(rename = "Average Similarity (%)")]
    pub average: f64,
}

impl PairResult {
    /// Build from the six metric outcomes
    ///
    /// Each score is scaled to a percentage and rounded; a failed metric counts
    /// as 0.0. The average is the mean of the six rounded scores, rounded again.
    pub fn from_outcomes(
        doc1: impl Into<String>,
        doc2: impl Into<String>,
        outcomes: &[(Metric, MetricOutcome)],
    ) -> Self {
        let mut result = PairResult {
            doc1: doc1.into(),
            doc2: doc2.into(),
            cosine_tfidf: 0.0,
            cosine_count: 0.0,
            jaccard: 0.0,
            lcs: 0.0,
            lsh: 0.0,
            ngram: 0.0,
            average: 0.0,
        };
        for (metric, outcome) in outcomes {
            let score = match outcome {
                Ok(value) => round2(value * 100.0),
                Err(_) => 0.0,
            };
            *result.score_mut(*metric) = score;
        }
        let scores = result.scores();
        result.average = round2(scores.iter().sum::<f64>() / scores.len() as f64);
        result
    }

    /// Score of one metric
    pub fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::CosineTfidf => self.cosine_tfidf,
            Metric::CosineCount => self.cosine_count,
            Metric::Jaccard => self.jaccard,
            Metric::Lcs => self.lcs,
            Metric::Lsh => self.lsh,
            Metric::NGram => self.ngram,
        }
    }

    fn score_mut(&mut self, metric: Metric) -> &mut f64 {
        match metric {
            Metric::CosineTfidf => &mut self.cosine_tfidf,
            Metric::CosineCount => &mut self.cosine_count,
            Metric::Jaccard => &mut self.jaccard,
            Metric::Lcs => &mut self.lcs,
            Metric::Lsh => &mut self.lsh,
            Metric::NGram => &mut self.ngram,
        }
    }

    /// The six scores in [`Metric::ALL`] order
    pub fn scores(&self) -> [f64; 6] {
        Metric::ALL.map(|m| self.score(m))
    }
}

/// Pair results in canonical pair order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    results: Vec<PairResult>,
}

impl ResultTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PairResult> {
        self.results.iter()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&PairResult> {
        self.results.get(idx)
    }

    pub fn as_slice(&self) -> &[PairResult] {
        &self.results
    }

    pub fn into_vec(self) -> Vec<PairResult> {
        self.results
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a PairResult;
    type IntoIter = std::slice::Iter<'a, PairResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Folds results arriving in completion order back into canonical order
#[derive(Debug)]
pub struct ResultAggregator {
    pairs: Vec<PairIndex>,
    slots: Vec<Option<PairResult>>,
}

impl ResultAggregator {
    /// `pairs[k]` is the pair owning slot `k`
    pub fn new(pairs: Vec<PairIndex>) -> Self {
        let slots = vec![None; pairs.len()];
        Self { pairs, slots }
    }

    /// Place a result in its slot
    ///
    /// # Errors
    /// `DuplicatePair` if the slot is already filled.
    pub fn accept(&mut self, position: usize, result: PairResult) -> Result<()> {
        let pair = self.pairs[position];
        let slot = &mut self.slots[position];
        if slot.is_some() {
            return Err(SimilarityError::DuplicatePair { i: pair.i, j: pair.j });
        }
        *slot = Some(result);
        Ok(())
    }

    /// Table in canonical order
    ///
    /// # Errors
    /// `MissingPair` for the first slot that never received a result.
    pub fn finish(self) -> Result<ResultTable> {
        let mut results = Vec::with_capacity(self.slots.len());
        for (pair, slot) in self.pairs.iter().zip(self.slots) {
            match slot {
                Some(result) => results.push(result),
                None => return Err(SimilarityError::MissingPair { i: pair.i, j: pair.j }),
            }
        }
        Ok(ResultTable { results })
    }
}
