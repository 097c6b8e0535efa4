/// Normalize raw extracted text
///
/// Lowercases every character and drops anything that is not a word character
/// (letter, digit, `_`) or whitespace. Whitespace runs are kept as-is.
///
/// # Arguments
/// * `raw` - raw text
///
/// # Returns
/// * `String` - normalized text
///
/// # Examples
/// ```
/// use doc_similarity::utils::normalizer::normalize;
/// assert_eq!(normalize("Hello,  World!"), "hello  world");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if is_word_char(c) || c.is_whitespace() {
            // 一部の文字は小文字化で複数文字になる
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Split normalized text into tokens
///
/// # Arguments
/// * `normalized` - output of [`normalize`]
///
/// # Returns
/// * `Vec<&str>` - whitespace-delimited tokens, never empty strings
#[inline]
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
