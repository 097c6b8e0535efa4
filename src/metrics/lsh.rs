//! MinHash estimate of shingle-set Jaccard similarity.
//!
//! Documents are cut into token shingles, each shingle is hashed once, and each
//! of the `permutations` signature slots keeps the minimum of the shingle hashes
//! re-hashed under that slot's seed. The fraction of agreeing slots estimates the
//! Jaccard similarity of the two shingle sets. Seeds are fixed (`0..permutations`)
//! so scores are reproducible across runs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::metrics::ngram::ngrams;

/// Seed used to hash shingle text before permutation
const SHINGLE_SEED: u64 = 0;

/// A MinHash signature, one minimum per permutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinHashSignature {
    pub values: Vec<u64>,
}

impl MinHashSignature {
    /// Fraction of slots where both signatures agree
    pub fn estimate_similarity(&self, other: &MinHashSignature) -> f64 {
        let len = self.values.len().min(other.values.len());
        if len == 0 {
            return 0.0;
        }
        let matches = self
            .values
            .iter()
            .zip(other.values.iter())
            .filter(|(a, b)| a == b)
            .count();
        matches as f64 / len as f64
    }
}

#[derive(Debug, Clone)]
pub struct MinHasher {
    permutations: usize,
    shingle_size: usize,
}

impl MinHasher {
    pub fn new(permutations: usize, shingle_size: usize) -> Self {
        Self { permutations, shingle_size }
    }

    /// Hashed token shingles
    fn shingles(&self, tokens: &[&str]) -> HashSet<u64> {
        let mut buf = String::new();
        ngrams(tokens, self.shingle_size)
            .into_iter()
            .map(|gram| {
                // tokens never contain whitespace, so a space join is unambiguous
                buf.clear();
                for (i, tok) in gram.iter().enumerate() {
                    if i > 0 {
                        buf.push(' ');
                    }
                    buf.push_str(tok);
                }
                xxh3_64_with_seed(buf.as_bytes(), SHINGLE_SEED)
            })
            .collect()
    }

    /// Signature of a token sequence, `None` when it has no shingles
    pub fn signature(&self, tokens: &[&str]) -> Option<MinHashSignature> {
        let shingles = self.shingles(tokens);
        if shingles.is_empty() {
            return None;
        }
        let values = (0..self.permutations as u64)
            .map(|seed| {
                shingles
                    .iter()
                    .map(|&shingle| xxh3_64_with_seed(&shingle.to_le_bytes(), seed))
                    .min()
                    .unwrap_or(u64::MAX)
            })
            .collect();
        Some(MinHashSignature { values })
    }

    /// Estimated similarity of two token sequences
    /// either side without shingles scores 0
    pub fn similarity(&self, a: &[&str], b: &[&str]) -> f64 {
        match (self.signature(a), self.signature(b)) {
            (Some(sig_a), Some(sig_b)) => sig_a.estimate_similarity(&sig_b),
            _ => 0.0,
        }
    }
}
