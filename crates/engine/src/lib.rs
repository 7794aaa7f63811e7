//! Index store, configuration and document providers for docsearch
//!
//! - [`IndexStore`]: build-once search index with a title→url lookup
//! - [`DocsearchConfig`]: `docsearch.toml` loading and validation
//! - [`DocumentProvider`]: where the static page set comes from
//!
//! # Usage
//!
//! ```
//! use docsearch_engine::{open_store, DocsearchConfig};
//!
//! let store = open_store(&DocsearchConfig::default()).unwrap();
//! store.ensure_built();
//! let results = store.search("helm").unwrap();
//! assert_eq!(results[0].url, "/helm/");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod provider;
pub mod store;

pub use config::{DocsearchConfig, RankingConfig, CONFIG_FILE_NAME};
pub use provider::{provider_for, DocumentProvider, JsonFileProvider, SiteProvider};
pub use store::{EngineFactory, IndexStore, CONTENT_FIELD, TITLE_FIELD};

use docsearch_core::Result;
use std::sync::Arc;

/// Load the configured corpus and wrap it in a not-yet-built store
///
/// # Errors
///
/// Returns an error if the corpus cannot be loaded or fails validation.
pub fn open_store(config: &DocsearchConfig) -> Result<Arc<IndexStore>> {
    config.ranking.validate()?;
    let provider = provider_for(config);
    let corpus = provider.load()?;
    tracing::debug!(
        target: "docsearch::index",
        source = %provider.describe(),
        documents = corpus.len(),
        "corpus loaded"
    );
    Ok(Arc::new(IndexStore::new(corpus, &config.ranking)))
}
