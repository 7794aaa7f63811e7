//! Tier 1: Store invariants

use crate::test_utils::*;
use docsearch::search::TextIndex;
use docsearch::{Error, IndexStore, SearchHit, SearchResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn mapping_covers_every_document_after_build() {
    let store = built_site_store();
    let mapping = store.mapping().unwrap();
    assert_eq!(mapping.len(), store.len());
    for doc in store.corpus() {
        assert_eq!(mapping.get(&doc.title), Some(&doc.url));
    }
}

#[test]
fn empty_query_is_empty_not_everything() {
    let store = built_site_store();
    assert!(store.search("").unwrap().is_empty());
}

#[test]
fn whitespace_query_goes_to_engine() {
    // Only the exact empty string short-circuits; the engine sees no terms
    let store = built_site_store();
    assert!(store.search("   ").unwrap().is_empty());
}

#[test]
fn query_before_build_is_precondition_violation() {
    let store = site_store();
    let err = store.search("helm").unwrap_err();
    assert!(matches!(err, Error::IndexNotBuilt));
    assert!(err.is_precondition_violation());
}

#[test]
fn ensure_built_is_idempotent() {
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = builds.clone();
    let store = IndexStore::with_engine(recipe_corpus(), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Box::new(FixedEngine(vec![SearchHit::new("Recipes", 1.0)])) as Box<dyn TextIndex>
    });

    store.ensure_built();
    let first = store.search("x").unwrap();
    store.ensure_built();
    store.ensure_built();

    assert_eq!(builds.load(Ordering::SeqCst), 1);
    assert_eq!(store.search("x").unwrap(), first);
}

#[test]
fn concurrent_ensure_built_builds_once() {
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = builds.clone();
    let store = Arc::new(IndexStore::with_engine(recipe_corpus(), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Box::new(FixedEngine(vec![])) as Box<dyn TextIndex>
    }));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || store.ensure_built())
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[test]
fn engine_order_is_preserved_exactly() {
    let store = IndexStore::with_engine(recipe_corpus(), |_| {
        Box::new(FixedEngine(vec![
            SearchHit::new("Deployment", 0.5),
            SearchHit::new("Recipes", 3.0),
        ])) as Box<dyn TextIndex>
    });
    store.ensure_built();

    assert_eq!(
        store.search("recipe").unwrap(),
        vec![
            SearchResult::new("Deployment", "/deployment/"),
            SearchResult::new("Recipes", "/recipes/"),
        ]
    );
}

#[test]
fn unknown_engine_reference_is_an_error() {
    let store = IndexStore::with_engine(recipe_corpus(), |_| {
        Box::new(FixedEngine(vec![SearchHit::new("Missing page", 1.0)])) as Box<dyn TextIndex>
    });
    store.ensure_built();
    assert!(matches!(
        store.search("x"),
        Err(Error::UnknownReference(r)) if r == "Missing page"
    ));
}

#[test]
fn store_is_shared_between_widgets() {
    let store = recipe_store();
    let mut a = open_widget(store.clone());
    let mut b = open_widget(store.clone());

    type_query(&mut a, "recipe");
    type_query(&mut b, "manifest");
    assert_eq!(titles(&a)[0], "Recipes");
    assert_eq!(titles(&b), vec!["Deployment"]);
    assert_eq!(Arc::strong_count(&store), 3);
}
