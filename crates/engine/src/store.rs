//! Lazily built search index store
//!
//! The store owns the corpus and, once built, the engine index plus the
//! title→url lookup. Building happens at most once per store, on the first
//! [`IndexStore::ensure_built`] call; every later call is a no-op. Until then
//! the store is in a distinguished not-built state and refuses queries.
//!
//! # Ordering
//!
//! The engine's hit order is authoritative. [`IndexStore::search`] maps hits
//! to results one-for-one and never re-sorts, filters or deduplicates them.

use crate::config::RankingConfig;
use docsearch_core::{Corpus, Error, Result, SearchResult};
use docsearch_search::{Bm25Scorer, IndexBuilder, TextIndex};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Field the page title is indexed under
pub const TITLE_FIELD: &str = "title";
/// Field the page body is indexed under
pub const CONTENT_FIELD: &str = "content";

/// Builds an engine index from a corpus
pub type EngineFactory = Box<dyn Fn(&Corpus) -> Box<dyn TextIndex> + Send + Sync>;

struct BuiltIndex {
    engine: Box<dyn TextIndex>,
    urls: HashMap<String, String>,
}

/// Build-once search index over a fixed corpus
///
/// # Thread Safety
///
/// The built state lives in a synchronized once-cell, so a store can be
/// shared through `Arc` and `ensure_built` may race without building twice.
pub struct IndexStore {
    corpus: Corpus,
    factory: EngineFactory,
    built: OnceCell<BuiltIndex>,
}

impl fmt::Debug for IndexStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexStore")
            .field("documents", &self.corpus.len())
            .field("built", &self.is_built())
            .finish()
    }
}

impl IndexStore {
    /// Create a store that will index `corpus` with the BM25 engine
    ///
    /// Titles and content are indexed as separate fields weighted by
    /// `ranking.title_boost` and `ranking.content_boost`.
    pub fn new(corpus: Corpus, ranking: &RankingConfig) -> Self {
        let ranking = ranking.clone();
        Self::with_engine(corpus, move |corpus: &Corpus| {
            let mut builder = IndexBuilder::new()
                .field(TITLE_FIELD, ranking.title_boost)
                .field(CONTENT_FIELD, ranking.content_boost)
                .with_scorer(Arc::new(Bm25Scorer::new(ranking.k1, ranking.b)));
            for doc in corpus {
                builder.add(
                    doc.title.clone(),
                    &[
                        (TITLE_FIELD, doc.title.as_str()),
                        (CONTENT_FIELD, doc.content.as_str()),
                    ],
                );
            }
            Box::new(builder.build()) as Box<dyn TextIndex>
        })
    }

    /// Create a store with a custom engine
    ///
    /// `factory` runs once, on the first `ensure_built`. It must index every
    /// document under its title.
    pub fn with_engine<F>(corpus: Corpus, factory: F) -> Self
    where
        F: Fn(&Corpus) -> Box<dyn TextIndex> + Send + Sync + 'static,
    {
        IndexStore {
            corpus,
            factory: Box::new(factory),
            built: OnceCell::new(),
        }
    }

    /// Build the index and title→url lookup if not built yet
    ///
    /// Safe to call on every widget activation.
    pub fn ensure_built(&self) {
        self.built.get_or_init(|| {
            info!(
                target: "docsearch::index",
                documents = self.corpus.len(),
                "Building search index..."
            );
            let start = Instant::now();

            let engine = (self.factory)(&self.corpus);
            let urls = self
                .corpus
                .iter()
                .map(|doc| (doc.title.clone(), doc.url.clone()))
                .collect();

            info!(
                target: "docsearch::index",
                documents = self.corpus.len(),
                elapsed_micros = start.elapsed().as_micros() as u64,
                "Search index built."
            );
            BuiltIndex { engine, urls }
        });
    }

    /// Whether `ensure_built` has completed
    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }

    /// Ranked results for `query`
    ///
    /// An empty query returns no results without consulting the engine.
    ///
    /// # Errors
    ///
    /// - `Error::IndexNotBuilt` if called before `ensure_built`
    /// - `Error::UnknownReference` if the engine names a document that is not
    ///   in the corpus
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let built = self.built.get().ok_or_else(|| {
            error!(target: "docsearch::index", query, "search issued before index was built");
            Error::IndexNotBuilt
        })?;

        if query.is_empty() {
            return Ok(vec![]);
        }

        let hits = built.engine.search(query);
        debug!(target: "docsearch::index", query, hits = hits.len(), "search");

        hits.into_iter()
            .map(|hit| match built.urls.get(&hit.doc_ref) {
                Some(url) => Ok(SearchResult {
                    url: url.clone(),
                    title: hit.doc_ref,
                }),
                None => Err(Error::UnknownReference(hit.doc_ref)),
            })
            .collect()
    }

    /// Url of the page titled `title`, once built
    pub fn url_for(&self, title: &str) -> Option<&str> {
        self.built
            .get()
            .and_then(|b| b.urls.get(title))
            .map(String::as_str)
    }

    /// The title→url lookup, once built
    pub fn mapping(&self) -> Option<&HashMap<String, String>> {
        self.built.get().map(|b| &b.urls)
    }

    /// The indexed corpus
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Number of documents in the corpus
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Whether the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }
}
