use unicode_normalization::UnicodeNormalization;

/// Canonical form of a headword: trimmed, NFKC-normalized, lowercased.
///
/// Applied to both the stored word and the index key on every insertion
/// path, so a library never holds two case variants of the same word and
/// exported text always carries the normalized form.
pub fn normalize_word(word: &str) -> String {
    word.trim().nfkc().collect::<String>().to_lowercase()
}
