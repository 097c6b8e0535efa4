use num::Num;

use crate::{utils::math::compare::SparseVec, vectorizer::{corpus::Corpus, term::TermFrequency}};

/// 重み付けエンジン
/// Turns a document's term counts into a sparse vector over the corpus vocabulary.
///
/// Implement this to plug a different weighting into the cosine metrics.
pub trait TermWeighting<N>
where
    N: Num + Copy,
{
    /// Weight of one term
    ///
    /// # Arguments
    /// * `count` - occurrences of the term in the document
    /// * `doc_freq` - documents in the corpus containing the term
    /// * `doc_num` - documents in the corpus
    fn weight(count: u32, doc_freq: u64, doc_num: u64) -> N;

    /// Sparse vector of the document over the corpus dimensions
    /// Terms missing from the corpus are ignored
    fn vectorize(freq: &TermFrequency, corpus: &Corpus) -> SparseVec<N> {
        let doc_num = corpus.doc_num();
        let entries = freq
            .iter()
            .filter_map(|(term, count)| {
                let idx = corpus.term_index(term)?;
                Some((idx, Self::weight(count, corpus.doc_freq(term), doc_num)))
            })
            .collect();
        SparseVec::from_entries(entries)
    }
}

/// Raw term counts
#[derive(Debug, Clone, Copy, Default)]
pub struct CountWeighting;

impl TermWeighting<u32> for CountWeighting {
    #[inline]
    fn weight(count: u32, _doc_freq: u64, _doc_num: u64) -> u32 {
        count
    }
}

/// TF-IDF with smoothed IDF
///
/// `w = count * (ln((1 + n) / (1 + df)) + 1)`
///
/// The `+ 1` keeps terms shared by every document non-zero, so two identical
/// documents still produce comparable vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfWeighting;

impl TfIdfWeighting {
    #[inline]
    pub fn idf(doc_freq: u64, doc_num: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl TermWeighting<f64> for TfIdfWeighting {
    #[inline]
    fn weight(count: u32, doc_freq: u64, doc_num: u64) -> f64 {
        count as f64 * Self::idf(doc_freq, doc_num)
    }
}
