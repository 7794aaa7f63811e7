//! Tier 3: Site scenarios over the bundled pages

use crate::test_utils::*;
use docsearch::{Key, WidgetState};

#[test]
fn recipe_ranks_recipes_before_deployment() {
    let mut widget = open_widget(recipe_store());
    type_query(&mut widget, "recipe");
    assert_eq!(titles(&widget), vec!["Recipes", "Deployment"]);
}

#[test]
fn recipe_on_site_lists_recipe_pages_first() {
    let store = built_site_store();
    let results = store.search("recipe").unwrap();
    let recipe_pages = results
        .iter()
        .take_while(|r| r.title.ends_with("recipes"))
        .count();
    assert_eq!(recipe_pages, 4);
    assert!(results[4..].iter().all(|r| !r.title.ends_with("recipes")));
}

#[test]
fn plural_and_singular_match_alike() {
    let store = built_site_store();
    assert_eq!(
        store.search("recipe").unwrap(),
        store.search("recipes").unwrap()
    );
}

#[test]
fn no_match_leaves_an_empty_list() {
    let mut widget = open_widget(site_store());
    type_query(&mut widget, "zzzznomatch");
    assert_eq!(widget.state(), WidgetState::OpenResults);
    assert!(widget.results().is_empty());
    assert!(widget.renderer().rows().is_empty());
}

#[test]
fn helm_finds_helm_support() {
    let mut widget = open_widget(site_store());
    type_query(&mut widget, "helm");
    assert_eq!(titles(&widget), vec!["Helm Support"]);

    press(&mut widget, Key::ArrowDown);
    assert_eq!(widget.selected().unwrap().url, "/helm/");
}

#[test]
fn title_scoped_query() {
    let store = built_site_store();
    let mut found: Vec<String> = store
        .search("title:akka")
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    found.sort();
    assert_eq!(found, vec!["Akka Cluster", "Akka Cluster recipes"]);
}

#[test]
fn required_and_prohibited_terms() {
    let store = built_site_store();
    let results = store.search("+ingress -manifest").unwrap();
    let found: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(found[0], "Ingress recipes");
    assert!(found.contains(&"Akka Cluster recipes"));
    assert!(!found.contains(&"Ingress manifest"));
    assert!(!found.contains(&"Helm Support"));
}

#[test]
fn prefix_query() {
    let store = built_site_store();
    let results = store.search("manif*").unwrap();
    assert!(results.iter().any(|r| r.title == "Ingress manifest"));
    assert!(results.iter().any(|r| r.title == "Service manifest"));
}

#[test]
fn hyphenated_input_searches_both_words() {
    let store = built_site_store();
    let results = store.search("akka-cluster").unwrap();
    assert!(results.iter().any(|r| r.title == "Akka Cluster"));
}

#[test]
fn typing_then_clearing_returns_to_empty() {
    let mut widget = open_widget(site_store());
    type_query(&mut widget, "deploy");
    assert!(!widget.results().is_empty());
    type_query(&mut widget, "");
    assert_eq!(widget.state(), WidgetState::OpenEmpty);
    assert!(widget.results().is_empty());
}
