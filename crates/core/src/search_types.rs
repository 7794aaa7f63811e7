//! Search types shared between the engine, the index store and the widget
//!
//! - SearchHit: what a text-search engine returns (opaque reference + score)
//! - SearchResult: what the widget renders (title + url)

use serde::{Deserialize, Serialize};

// ============================================================================
// SearchHit
// ============================================================================

/// A ranked hit returned by a text-search engine
///
/// `doc_ref` is the reference key the document was indexed under, which is
/// always the document title in this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Reference key of the matched document
    pub doc_ref: String,
    /// Relevance score (higher = more relevant, not normalized)
    pub score: f32,
}

impl SearchHit {
    /// Create a new hit
    pub fn new(doc_ref: impl Into<String>, score: f32) -> Self {
        SearchHit {
            doc_ref: doc_ref.into(),
            score,
        }
    }
}

// ============================================================================
// SearchResult
// ============================================================================

/// A hit joined with the url of its page, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Page title
    pub title: String,
    /// Page url
    pub url: String,
}

impl SearchResult {
    /// Create a new result
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        SearchResult {
            title: title.into(),
            url: url.into(),
        }
    }
}
