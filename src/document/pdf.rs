use tracing::warn;

use crate::error::ExtractionError;

/// PDF text extraction collaborator
///
/// Returns one entry per page; `None` marks a page whose text could not be
/// extracted. An `Err` means the document as a whole could not be read.
pub trait PdfTextExtractor: Send + Sync {
    fn extract_pages(&self, label: &str, bytes: &[u8]) -> Result<Vec<Option<String>>, ExtractionError>;
}

/// Default extractor backed by `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfExtractor;

impl PdfTextExtractor for LopdfExtractor {
    fn extract_pages(&self, label: &str, bytes: &[u8]) -> Result<Vec<Option<String>>, ExtractionError> {
        let doc = lopdf::Document::load_mem(bytes).map_err(|e| ExtractionError::Pdf {
            label: label.to_string(),
            reason: e.to_string(),
        })?;
        let pages = doc
            .get_pages()
            .into_keys()
            .map(|page_num| match doc.extract_text(&[page_num]) {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!(document = label, page = page_num, error = %e, "page text unextractable, treating as empty");
                    None
                }
            })
            .collect();
        Ok(pages)
    }
}

/// Concatenate page texts, unextractable pages contribute nothing
pub fn join_pages(pages: Vec<Option<String>>) -> String {
    pages.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_pages_skips_missing_pages() {
        let pages = vec![Some("first ".to_string()), None, Some("third".to_string())];
        assert_eq!(join_pages(pages), "first third");
    }

    #[test]
    fn garbage_bytes_are_a_pdf_error() {
        let err = LopdfExtractor.extract_pages("junk.pdf", b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf { ref label, .. } if label == "junk.pdf"));
    }
}
