//! Accent-insensitive tokenizer for Spanish legal text.
//!
//! Lowercases, strips diacritics, drops punctuation (keeping `%`), splits on
//! whitespace and removes stopwords. Stopwords are stored already normalized,
//! so accented and unaccented spellings ("él", "el") are both removed.

use std::collections::HashSet;
use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // articles
        "el", "la", "los", "las", "un", "una", "unos", "unas", "lo", "al", "del",
        // conjunctions
        "y", "e", "o", "u", "ni", "que", "pero", "sino", "mas", "aunque", "porque", "pues",
        "si", "como", "cuando",
        // prepositions
        "a", "ante", "bajo", "con", "contra", "de", "desde", "en", "entre", "hacia", "hasta",
        "para", "por", "segun", "sin", "sobre", "tras",
        // pronouns and determiners
        "yo", "tu", "ella", "ello", "nosotros", "vosotros", "ellos", "ellas", "me", "te",
        "se", "nos", "os", "le", "les", "mi", "mis", "su", "sus", "este", "esta", "estos",
        "estas", "ese", "esa", "esos", "esas", "aquel", "aquella", "esto", "eso",
        // frequent verbs and adverbs
        "es", "son", "ser", "ha", "han", "hay", "no", "muy", "ya",
    ]
    .into_iter()
    .collect()
});

/// Returns true when `term` (already normalized) is a stopword.
pub fn is_stopword(term: &str) -> bool {
    STOPWORDS.contains(term)
}

/// Lowercase `text` and remove diacritics ("Educación" -> "educacion").
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Split `text` into significant terms, in order of appearance.
///
/// Duplicates are kept; use [`term_set`] when a set is needed.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = normalize(text)
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '%')
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| !token.is_empty() && !is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// Deduplicate terms, keeping the first occurrence of each.
pub fn term_set(tokens: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|token| seen.insert(token.as_str()))
        .cloned()
        .collect()
}
