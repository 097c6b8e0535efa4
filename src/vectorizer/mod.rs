//! Term counting and weighting behind the cosine metrics.
//!
//! A [`corpus::Corpus`] is built from the two documents of a pair; each
//! document's [`term::TermFrequency`] is then turned into a sparse vector over
//! the corpus vocabulary by a [`tfidf::TermWeighting`].
pub mod corpus;
pub mod term;
pub mod tfidf;
