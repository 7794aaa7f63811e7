//! Text tokenizer for search operations
//!
//! Pipeline: UAX#29 word boundaries → strip possessives → remove non-alphanumeric
//!           → lowercase → filter short tokens → remove stopwords → Snowball stem
//!
//! Documents and queries go through the same pipeline, so "Recipes" in a page
//! title and "recipe" typed into the search box meet on the same term.

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

/// Standard English stopwords (Lucene's default set).
///
/// These high-frequency words carry little discriminative value for BM25
/// and are filtered out during tokenization.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

/// Check if a token is a stopword.
#[inline]
fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Strip English possessive suffix (`'s` / `\u{2019}s`).
#[inline]
fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("\u{2019}s"))
        .unwrap_or(word)
}

/// Lowercase a word and drop every non-alphanumeric character.
#[inline]
fn fold(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Run the filter/stem tail of the pipeline on one folded word.
fn analyze(word: String) -> Option<String> {
    if word.len() < 2 || is_stopword(&word) {
        return None;
    }
    Some(STEMMER.stem(&word).into_owned())
}

/// Tokenize text into searchable terms.
///
/// 1. UAX#29 word boundaries (`unicode_words`)
/// 2. Strip English possessives (`'s`)
/// 3. Remove non-alphanumeric characters (e.g. internal apostrophes)
/// 4. Lowercase
/// 5. Filter tokens shorter than 2 characters
/// 6. Remove stopwords
/// 7. Snowball (Porter2) English stemming
///
/// # Example
///
/// ```
/// use docsearch_search::tokenizer::tokenize;
///
/// assert_eq!(tokenize("Recipes"), tokenize("recipe"));
/// assert!(tokenize("the and of").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(strip_possessive)
        .map(fold)
        .filter_map(analyze)
        .collect()
}

/// Tokenize and deduplicate for query processing.
///
/// # Example
///
/// ```
/// use docsearch_search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("test test TEST");
/// assert_eq!(tokens, vec!["test"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Normalize a wildcard prefix: lowercase and strip punctuation, no stemming.
///
/// Stemming a partial word would cut it somewhere other than where the
/// indexed stem ends, so prefixes are matched against stems as typed.
pub fn normalize_prefix(text: &str) -> Option<String> {
    let folded = fold(text);
    if folded.is_empty() {
        None
    } else {
        Some(folded)
    }
}
