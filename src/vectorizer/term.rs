use indexmap::IndexMap;

/// TermFrequency struct
/// Counts how many times each term occurs in one document.
/// Terms keep their first-seen order.
///
/// # Examples
/// ```
/// use doc_similarity::vectorizer::term::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("term1");
/// term_freq.add_term("term2");
/// term_freq.add_term("term1");
///
/// let counts: Vec<(&str, u32)> = term_freq.iter().collect();
/// assert_eq!(counts, vec![("term1", 2), ("term2", 1)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TermFrequency {
    term_count: IndexMap<String, u32>,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
        }
    }

    /// Build from a token sequence
    pub fn from_terms<T>(terms: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = Self::new();
        freq.add_terms(terms);
        freq
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// `(term, count)` in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(t, &c)| (t.as_str(), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_terms() {
        let freq = TermFrequency::from_terms(&["a", "b", "a", "c", "a"]);
        let counts: Vec<(&str, u32)> = freq.iter().collect();
        assert_eq!(counts, vec![("a", 3), ("b", 1), ("c", 1)]);
    }

    #[test]
    fn iteration_keeps_first_seen_order() {
        let freq = TermFrequency::from_terms(&["z", "y", "z", "x"]);
        let order: Vec<&str> = freq.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["z", "y", "x"]);
    }

    #[test]
    fn empty_frequency() {
        let freq = TermFrequency::from_terms::<&str>(&[]);
        assert_eq!(freq.iter().count(), 0);
    }
}
