use std::collections::HashSet;

use crate::metrics::jaccard::set_jaccard;

/// Distinct token n-grams of a sequence
///
/// A non-empty sequence shorter than `n` yields the whole sequence as its only
/// gram; an empty sequence yields nothing.
pub fn ngrams<'a, 'b>(tokens: &'a [&'b str], n: usize) -> HashSet<&'a [&'b str]> {
    if tokens.is_empty() {
        return HashSet::new();
    }
    if tokens.len() < n {
        return HashSet::from([tokens]);
    }
    tokens.windows(n).collect()
}

/// N-gram overlap: Jaccard similarity over token n-gram sets
pub fn ngram_overlap(a: &[&str], b: &[&str], n: usize) -> f64 {
    set_jaccard(&ngrams(a, n), &ngrams(b, n))
}
