use std::collections::HashSet;
use std::hash::Hash;

/// Jaccard similarity of the token sets
///
/// Duplicates are ignored. Two empty inputs score 0, not 1.
pub fn jaccard(a: &[&str], b: &[&str]) -> f64 {
    let set_a: HashSet<&str> = a.iter().copied().collect();
    let set_b: HashSet<&str> = b.iter().copied().collect();
    set_jaccard(&set_a, &set_b)
}

/// `|A ∩ B| / |A ∪ B|` with an empty union scoring 0
pub(crate) fn set_jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|t| large.contains(*t)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_empty_is_zero() {
        assert_eq!(jaccard(&[], &[]), 0.0);
    }

    #[test]
    fn one_empty_is_zero() {
        assert_eq!(jaccard(&["a"], &[]), 0.0);
    }

    #[test]
    fn identical_is_one() {
        assert_eq!(jaccard(&["a", "b", "a"], &["b", "a"]), 1.0);
    }

    #[test]
    fn partial_overlap() {
        // {a, b, c} vs {b, c, d} -> 2 / 4
        assert_eq!(jaccard(&["a", "b", "c"], &["b", "c", "d"]), 0.5);
    }

    #[test]
    fn duplicates_ignored() {
        assert_eq!(jaccard(&["a", "a", "a", "b"], &["a", "c"]), 1.0 / 3.0);
    }
}
