//! Inverted index for one searchable field
//!
//! This module provides:
//! - PostingEntry / PostingList: per-term document statistics
//! - InvertedIndex: term -> postings for a single field, plus the corpus
//!   statistics BM25 needs (document frequency, average field length)
//!
//! The index is filled once while the engine is built and only read
//! afterwards, so it needs no interior mutability.

use crate::tokenizer::tokenize;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Ordinal of a document in insertion order
pub type DocId = u32;

// ============================================================================
// PostingEntry
// ============================================================================

/// Entry in a posting list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostingEntry {
    /// Document the term occurs in
    pub doc: DocId,
    /// Term frequency in this document's field
    pub tf: u32,
    /// Field length in tokens
    pub doc_len: u32,
}

impl PostingEntry {
    /// Create a new posting entry
    pub fn new(doc: DocId, tf: u32, doc_len: u32) -> Self {
        PostingEntry { doc, tf, doc_len }
    }
}

// ============================================================================
// PostingList
// ============================================================================

/// List of documents containing a term, in insertion order
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    /// Document entries
    pub entries: Vec<PostingEntry>,
}

impl PostingList {
    /// Create a new empty posting list
    pub fn new() -> Self {
        PostingList { entries: vec![] }
    }

    /// Add an entry to the posting list
    pub fn add(&mut self, entry: PostingEntry) {
        self.entries.push(entry);
    }

    /// Number of documents containing this term
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if posting list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// InvertedIndex
// ============================================================================

/// Inverted index over a single field
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// Term -> PostingList mapping
    postings: FxHashMap<String, PostingList>,

    /// Sorted terms, for prefix expansion
    vocabulary: BTreeSet<String>,

    /// Total documents indexed (including ones with an empty field)
    total_docs: usize,

    /// Sum of all field lengths (for average calculation)
    total_doc_len: usize,
}

impl InvertedIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Get total number of indexed documents
    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    /// Get document frequency for a term
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map(PostingList::len).unwrap_or(0)
    }

    /// Get average field length
    pub fn avg_doc_len(&self) -> f32 {
        if self.total_docs == 0 {
            return 0.0;
        }
        self.total_doc_len as f32 / self.total_docs as f32
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    // ========================================================================
    // Index Updates
    // ========================================================================

    /// Index one document's field text
    ///
    /// Every document must be indexed exactly once per field, even when its
    /// text is empty, so that `total_docs` agrees across fields.
    pub fn index_document(&mut self, doc: DocId, text: &str) {
        let tokens = tokenize(text);
        let doc_len = tokens.len() as u32;

        // Count term frequencies
        let mut tf_map: FxHashMap<String, u32> = FxHashMap::default();
        for token in tokens {
            *tf_map.entry(token).or_insert(0) += 1;
        }

        // Sorted so posting lists and vocabulary are filled deterministically
        let mut terms: Vec<(String, u32)> = tf_map.into_iter().collect();
        terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        for (term, tf) in terms {
            if !self.postings.contains_key(&term) {
                self.vocabulary.insert(term.clone());
            }
            self.postings
                .entry(term)
                .or_default()
                .add(PostingEntry::new(doc, tf, doc_len));
        }

        self.total_docs += 1;
        self.total_doc_len += doc_len as usize;
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Lookup documents containing a term
    pub fn lookup(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// All indexed terms starting with `prefix`, in lexical order
    pub fn expand_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.vocabulary
            .range::<str, _>((std::ops::Bound::Included(prefix), std::ops::Bound::Unbounded))
            .take_while(move |t| t.starts_with(prefix))
            .map(String::as_str)
    }

    /// Get all terms in the index, in lexical order
    pub fn terms(&self) -> Vec<String> {
        self.vocabulary.iter().cloned().collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_document() {
        let mut index = InvertedIndex::new();
        index.index_document(0, "hello world test");

        assert_eq!(index.total_docs(), 1);
        assert_eq!(index.doc_freq("hello"), 1);
        assert_eq!(index.doc_freq("world"), 1);
        assert_eq!(index.doc_freq("test"), 1);

        let postings = index.lookup("hello").unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings.entries[0].tf, 1);
        assert_eq!(postings.entries[0].doc_len, 3);
    }

    #[test]
    fn test_index_multiple_documents() {
        let mut index = InvertedIndex::new();
        index.index_document(0, "hello world");
        index.index_document(1, "hello there friend");

        assert_eq!(index.total_docs(), 2);
        assert_eq!(index.doc_freq("hello"), 2);
        assert_eq!(index.doc_freq("world"), 1);

        let postings = index.lookup("hello").unwrap();
        let docs: Vec<_> = postings.entries.iter().map(|e| e.doc).collect();
        assert_eq!(docs, vec![0, 1]);
    }

    #[test]
    fn test_index_term_frequency() {
        let mut index = InvertedIndex::new();
        index.index_document(0, "hello hello hello world");

        assert_eq!(index.lookup("hello").unwrap().entries[0].tf, 3);
        assert_eq!(index.lookup("world").unwrap().entries[0].tf, 1);
    }

    #[test]
    fn test_empty_field_still_counts() {
        let mut index = InvertedIndex::new();
        index.index_document(0, "");
        index.index_document(1, "one two three four");

        assert_eq!(index.total_docs(), 2);
        assert!((index.avg_doc_len() - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_avg_doc_len_empty_index() {
        let index = InvertedIndex::new();
        assert_eq!(index.avg_doc_len(), 0.0);
        assert!(index.lookup("anything").is_none());
    }

    #[test]
    fn test_expand_prefix() {
        let mut index = InvertedIndex::new();
        index.index_document(0, "helm hello world");

        let expanded: Vec<_> = index.expand_prefix("hel").collect();
        assert_eq!(expanded, vec!["hello", "helm"]);
        assert_eq!(index.expand_prefix("zzz").count(), 0);
    }

    #[test]
    fn test_terms_sorted() {
        let mut index = InvertedIndex::new();
        index.index_document(0, "world hello");
        assert_eq!(index.terms(), vec!["hello", "world"]);
        assert_eq!(index.term_count(), 2);
    }

    #[test]
    fn test_posting_list() {
        let mut list = PostingList::new();
        assert!(list.is_empty());

        list.add(PostingEntry::new(0, 1, 10));
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
    }
}
