use indexmap::IndexMap;

use crate::vectorizer::term::TermFrequency;

/// Corpus of the documents under comparison
///
/// Keeps the vocabulary (term -> dimension index, first-seen order) and the
/// number of documents each term appears in. For pairwise scoring this is a
/// two-document corpus built fresh per pair.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// term -> document frequency
    /// index in this map is the vector dimension of the term
    doc_freq: IndexMap<Box<str>, u64>,
    doc_num: u64,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_freq: IndexMap::new(),
            doc_num: 0,
        }
    }

    /// Build a corpus from documents
    pub fn from_docs<'a>(docs: impl IntoIterator<Item = &'a TermFrequency>) -> Self {
        let mut corpus = Self::new();
        for doc in docs {
            corpus.add_doc(doc);
        }
        corpus
    }

    /// Add a document's terms to the corpus
    pub fn add_doc(&mut self, doc: &TermFrequency) {
        self.doc_num += 1;
        for (term, _) in doc.iter() {
            if let Some(count) = self.doc_freq.get_mut(term) {
                *count += 1;
            } else {
                self.doc_freq.insert(term.into(), 1);
            }
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing the term
    #[inline]
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// Vector dimension assigned to the term
    #[inline]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.doc_freq.get_index_of(term)
    }
}
