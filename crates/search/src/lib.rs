//! Full-text search engine for docsearch
//!
//! This crate provides:
//! - Tokenizer with stopwords and English stemming
//! - Query parser (required/prohibited clauses, field scope, prefix, boost)
//! - Per-field inverted index
//! - Scorer trait with a BM25 implementation
//! - TextIndex trait and the Bm25Index that implements it
//!
//! The index store in `docsearch-engine` treats [`TextIndex`] as an opaque
//! ranking oracle; nothing outside this crate depends on how hits are scored.
//!
//! # Usage
//!
//! ```
//! use docsearch_search::{IndexBuilder, TextIndex};
//!
//! let mut builder = IndexBuilder::new().field("title", 5.0).field("content", 1.0);
//! builder.add("Recipes", &[("title", "Recipes"), ("content", "Gitlab CI recipe")]);
//! builder.add("Deployment", &[("title", "Deployment"), ("content", "manifest")]);
//! let index = builder.build();
//!
//! let hits = index.search("recipe");
//! assert_eq!(hits[0].doc_ref, "Recipes");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod index;
pub mod query;
pub mod scorer;
pub mod tokenizer;

// Re-export commonly used types
pub use engine::{Bm25Index, IndexBuilder, TextIndex};
pub use index::{DocId, InvertedIndex, PostingEntry, PostingList};
pub use query::{Clause, Presence, Query};
pub use scorer::{Bm25Scorer, Scorer, ScorerContext, TermStats};
pub use tokenizer::{tokenize, tokenize_unique};
