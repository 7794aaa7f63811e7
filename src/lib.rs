//! docsearch: in-memory search for static documentation sites
//!
//! This crate re-exports the workspace behind one dependency:
//! - [`IndexStore`]: lazily built index over the site's pages
//! - [`SearchController`]: the keyboard-navigable result dropdown
//! - [`DocsearchConfig`]: `docsearch.toml` settings
//! - [`search`]: the BM25 engine, for custom stores
//!
//! # Example
//!
//! ```
//! use docsearch::{open_store, ClickEvent, DocsearchConfig, EventTarget, HtmlListRenderer,
//!                 Key, KeyEvent, SearchController};
//!
//! let store = open_store(&DocsearchConfig::default()).unwrap();
//! let mut widget = SearchController::new(store, HtmlListRenderer::new());
//!
//! widget.open(&ClickEvent::new(EventTarget::Input));
//! widget
//!     .on_key_up(&KeyEvent::new(Key::Char('e'), EventTarget::Input), "recipe")
//!     .unwrap();
//! assert!(widget.results()[0].title.ends_with("recipes"));
//! ```

pub use docsearch_search as search;

pub use docsearch_core::{Corpus, Document, Error, Result, SearchHit, SearchResult};
pub use docsearch_engine::{
    open_store, provider_for, DocsearchConfig, DocumentProvider, IndexStore, JsonFileProvider,
    RankingConfig, SiteProvider, CONFIG_FILE_NAME,
};
pub use docsearch_widget::{
    ClickEvent, EventTarget, Focus, HtmlListRenderer, Key, KeyEvent, Listener, ListenerSet,
    Propagation, RenderCommand, RenderError, ResultRenderer, SearchController, WidgetState,
};
