//! Test utilities for the widget comprehensive suite

use docsearch::search::TextIndex;
use docsearch::{
    open_store, ClickEvent, Corpus, DocsearchConfig, Document, EventTarget, Focus,
    HtmlListRenderer, IndexStore, Key, KeyEvent, Propagation, RankingConfig, SearchController,
    SearchHit,
};
use std::sync::Arc;

pub type Widget = SearchController<HtmlListRenderer>;

/// Store over the bundled site pages, not yet built
pub fn site_store() -> Arc<IndexStore> {
    open_store(&DocsearchConfig::default()).unwrap()
}

/// Built store over the bundled site pages
pub fn built_site_store() -> Arc<IndexStore> {
    let store = site_store();
    store.ensure_built();
    store
}

/// The two-page corpus from the recipe scenario
pub fn recipe_corpus() -> Corpus {
    Corpus::new(vec![
        Document::new(
            "Recipes",
            "/recipes/",
            "Gitlab CI recipe for deploying to a namespace",
        ),
        Document::new(
            "Deployment",
            "/deployment/",
            "The deployment manifest, see the recipe page",
        ),
    ])
    .unwrap()
}

pub fn recipe_store() -> Arc<IndexStore> {
    Arc::new(IndexStore::new(recipe_corpus(), &RankingConfig::default()))
}

/// Engine that answers every query with the same hits
pub struct FixedEngine(pub Vec<SearchHit>);

impl TextIndex for FixedEngine {
    fn search(&self, _query: &str) -> Vec<SearchHit> {
        self.0.clone()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Widget over `store` that has been opened from the search box
pub fn open_widget(store: Arc<IndexStore>) -> Widget {
    let mut widget = SearchController::new(store, HtmlListRenderer::new());
    assert_eq!(
        widget.open(&ClickEvent::new(EventTarget::Input)),
        Propagation::Stop
    );
    widget
}

/// Type `text` into the search box
pub fn type_query(widget: &mut Widget, text: &str) {
    let key = text.chars().last().map_or(Key::Backspace, Key::Char);
    widget
        .on_key_up(&KeyEvent::new(key, EventTarget::Input), text)
        .unwrap();
}

/// Press `key` on whatever has focus
pub fn press(widget: &mut Widget, key: Key) -> Propagation {
    let target = match widget.focus() {
        Focus::Input => EventTarget::Input,
        Focus::Result(i) => EventTarget::ResultRow(i),
    };
    widget.on_key_down(&KeyEvent::new(key, target))
}

pub fn titles(widget: &Widget) -> Vec<&str> {
    widget.results().iter().map(|r| r.title.as_str()).collect()
}
