use num::Num;

use crate::{
    utils::math::compare::cosine_similarity,
    vectorizer::{
        corpus::Corpus,
        term::TermFrequency,
        tfidf::{CountWeighting, TermWeighting, TfIdfWeighting},
    },
};

/// Cosine similarity of TF-IDF vectors over the pair corpus `{a, b}`
pub fn cosine_tfidf(a: &[&str], b: &[&str]) -> f64 {
    cosine_with::<TfIdfWeighting, f64>(a, b)
}

/// Cosine similarity of raw term-count vectors
pub fn cosine_count(a: &[&str], b: &[&str]) -> f64 {
    cosine_with::<CountWeighting, u32>(a, b)
}

fn cosine_with<W, N>(a: &[&str], b: &[&str]) -> f64
where
    W: TermWeighting<N>,
    N: Num + Copy + Into<f64>,
{
    let freq_a = TermFrequency::from_terms(a);
    let freq_b = TermFrequency::from_terms(b);
    let corpus = Corpus::from_docs([&freq_a, &freq_b]);
    let vec_a = W::vectorize(&freq_a, &corpus);
    let vec_b = W::vectorize(&freq_b, &corpus);
    cosine_similarity(vec_a.iter(), vec_b.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn identical_texts_score_one() {
        let a = ["the", "cat", "sat", "on", "the", "mat"];
        assert!((cosine_tfidf(&a, &a) - 1.0).abs() < EPS);
        assert!((cosine_count(&a, &a) - 1.0).abs() < EPS);
    }

    #[test]
    fn disjoint_texts_score_zero() {
        let a = ["the", "cat", "sat"];
        let b = ["a", "dog", "ran"];
        assert_eq!(cosine_tfidf(&a, &b), 0.0);
        assert_eq!(cosine_count(&a, &b), 0.0);
    }

    #[test]
    fn empty_text_scores_zero() {
        let a = ["word"];
        assert_eq!(cosine_tfidf(&[], &a), 0.0);
        assert_eq!(cosine_count(&[], &[]), 0.0);
    }

    #[test]
    fn count_cosine_known_value() {
        // a = {x:2, y:1}, b = {x:1, z:1} -> 2 / (sqrt(5) * sqrt(2))
        let a = ["x", "y", "x"];
        let b = ["x", "z"];
        let expected = 2.0 / (5.0_f64.sqrt() * 2.0_f64.sqrt());
        assert!((cosine_count(&a, &b) - expected).abs() < EPS);
    }

    #[test]
    fn tfidf_downweights_shared_terms() {
        // shared term "x" has idf 1, unique terms have idf > 1,
        // so tf-idf cosine is below the raw count cosine
        let a = ["x", "y"];
        let b = ["x", "z"];
        assert!(cosine_tfidf(&a, &b) < cosine_count(&a, &b));
        assert!(cosine_tfidf(&a, &b) > 0.0);
    }

    #[test]
    fn symmetric() {
        let a = ["one", "two", "two", "three"];
        let b = ["two", "three", "four"];
        assert!((cosine_tfidf(&a, &b) - cosine_tfidf(&b, &a)).abs() < EPS);
        assert!((cosine_count(&a, &b) - cosine_count(&b, &a)).abs() < EPS);
    }
}
