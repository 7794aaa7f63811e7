//! Core types for docsearch
//!
//! This crate defines the foundational types shared by every other crate:
//! - Document: a single page of the documentation site
//! - Corpus: the validated, ordered document set
//! - SearchHit: an engine hit (opaque reference + score)
//! - SearchResult: a hit joined with its page url
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod search_types;

pub use document::{Corpus, Document};
pub use error::{Error, Result};
pub use search_types::{SearchHit, SearchResult};
