//! Document providers
//!
//! A provider supplies the static page set once, before the index store is
//! created. The store only ever sees the resulting [`Corpus`].

use crate::config::DocsearchConfig;
use docsearch_core::{Corpus, Result};
use std::path::PathBuf;

/// Pages bundled with the site, as a JSON array.
const SITE_DOCS: &str = include_str!("../data/site_docs.json");

/// Source of the document set
pub trait DocumentProvider {
    /// Load and validate the corpus
    fn load(&self) -> Result<Corpus>;

    /// Human-readable source name for logs
    fn describe(&self) -> String;
}

/// The documentation pages bundled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteProvider;

impl DocumentProvider for SiteProvider {
    fn load(&self) -> Result<Corpus> {
        Corpus::from_json(SITE_DOCS)
    }

    fn describe(&self) -> String {
        "bundled site pages".to_string()
    }
}

/// A JSON array of `{title, url, content}` objects on disk
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Create a provider reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileProvider { path: path.into() }
    }
}

impl DocumentProvider for JsonFileProvider {
    fn load(&self) -> Result<Corpus> {
        let json = std::fs::read_to_string(&self.path)?;
        Corpus::from_json(&json)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick the provider a config asks for
pub fn provider_for(config: &DocsearchConfig) -> Box<dyn DocumentProvider> {
    match &config.corpus {
        Some(path) => Box::new(JsonFileProvider::new(path.clone())),
        None => Box::new(SiteProvider),
    }
}
