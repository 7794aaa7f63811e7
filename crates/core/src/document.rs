//! Documents and the corpus they belong to
//!
//! A [`Corpus`] is the fixed, ordered set of pages the site exposes to search.
//! Titles act as identifiers: the search engine refers to documents by title,
//! and the title→url lookup is keyed the same way. The corpus enforces that
//! every title is present and unique so that lookup is closed-world.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Document
// ============================================================================

/// A single page of the documentation site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Page title, unique within a corpus
    pub title: String,
    /// Site-relative path of the page
    pub url: String,
    /// Free text of the page
    #[serde(default)]
    pub content: String,
}

impl Document {
    /// Create a new document
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Document {
            title: title.into(),
            url: url.into(),
            content: content.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidDocument(format!(
                "document with url '{}' has an empty title",
                self.url
            )));
        }
        if self.url.trim().is_empty() {
            return Err(Error::InvalidDocument(format!(
                "document '{}' has an empty url",
                self.title
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Corpus
// ============================================================================

/// Validated, ordered set of documents
///
/// Immutable after construction. Insertion order is kept because the engine
/// uses it to break ranking ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Build a corpus, rejecting empty fields and duplicate titles
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in &documents {
            doc.validate()?;
            if !seen.insert(doc.title.as_str()) {
                return Err(Error::DuplicateTitle(doc.title.clone()));
            }
        }
        Ok(Corpus { documents })
    }

    /// Parse a JSON array of `{title, url, content}` objects
    pub fn from_json(json: &str) -> Result<Self> {
        let documents: Vec<Document> = serde_json::from_str(json)?;
        Self::new(documents)
    }

    /// Documents in insertion order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Iterate over documents in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Look up a document by title
    pub fn get(&self, title: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.title == title)
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus has no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
