pub mod loader;
pub mod pdf;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ExtractionError, Result, SimilarityError},
    utils::normalizer::{normalize, tokenize},
};

/// One loaded document
/// `text` is already normalized and never changes after load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    label: String,
    text: String,
}

impl Document {
    /// Build from raw text, normalizing it
    pub fn from_raw(label: impl Into<String>, raw: &str) -> Self {
        Self { label: label.into(), text: normalize(raw) }
    }

    /// Empty document standing in for one that failed to load
    pub fn empty(label: impl Into<String>) -> Self {
        Self { label: label.into(), text: String::new() }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn tokens(&self) -> Vec<&str> {
        tokenize(&self.text)
    }
}

/// Ordered documents of one comparison run
/// Order is input order; it fixes pair enumeration and reported labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    documents: Vec<Document>,
    /// labels of documents replaced by empty text under the degrade policy
    degraded: Vec<String>,
}

impl DocumentSet {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents, degraded: Vec::new() }
    }

    pub(crate) fn with_degraded(documents: Vec<Document>, degraded: Vec<String>) -> Self {
        Self { documents, degraded }
    }

    /// Raw texts labelled `Doc_1`, `Doc_2`, ...
    pub fn from_texts<T: AsRef<str>>(texts: &[T]) -> Self {
        Self::new(
            texts
                .iter()
                .enumerate()
                .map(|(i, t)| Document::from_raw(format!("Doc_{}", i + 1), t.as_ref()))
                .collect(),
        )
    }

    /// Raw texts with caller supplied labels
    pub fn from_labeled_texts<L, T>(items: impl IntoIterator<Item = (L, T)>) -> Self
    where
        L: Into<String>,
        T: AsRef<str>,
    {
        Self::new(
            items
                .into_iter()
                .map(|(label, text)| Document::from_raw(label, text.as_ref()))
                .collect(),
        )
    }

    /// Fail unless the set can be compared
    pub fn ensure_comparable(&self) -> Result<()> {
        if self.documents.len() < 2 {
            return Err(SimilarityError::InsufficientDocuments { found: self.documents.len() });
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Document> {
        self.documents.get(idx)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.label.clone()).collect()
    }

    pub fn degraded(&self) -> &[String] {
        &self.degraded
    }
}

impl std::ops::Index<usize> for DocumentSet {
    type Output = Document;

    fn index(&self, idx: usize) -> &Document {
        &self.documents[idx]
    }
}

/// How the bytes of an input are turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    Pdf,
    Text,
}

impl InputKind {
    /// `.pdf` (any case) is a PDF, everything else is text
    pub fn from_label(label: &str) -> Self {
        let is_pdf = Path::new(label)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if is_pdf { InputKind::Pdf } else { InputKind::Text }
    }
}

/// Raw input handed over by the ingestion layer
#[derive(Debug, Clone)]
pub struct DocumentInput {
    pub label: String,
    pub bytes: Vec<u8>,
    pub kind: InputKind,
}

impl DocumentInput {
    pub fn new(label: impl Into<String>, bytes: Vec<u8>, kind: InputKind) -> Self {
        Self { label: label.into(), bytes, kind }
    }

    /// Kind inferred from the label's extension
    pub fn from_label(label: impl Into<String>, bytes: Vec<u8>) -> Self {
        let label = label.into();
        let kind = InputKind::from_label(&label);
        Self { label, bytes, kind }
    }

    /// Read a file; the label is its file name
    pub fn from_path<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ExtractionError> {
        let path = path.as_ref();
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = std::fs::read(path).map_err(|source| ExtractionError::Io {
            label: label.clone(),
            source,
        })?;
        Ok(Self::from_label(label, bytes))
    }
}
