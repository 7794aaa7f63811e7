//! Tier 2: Controller lifecycle

use crate::test_utils::*;
use docsearch::{
    ClickEvent, EventTarget, Focus, HtmlListRenderer, Key, KeyEvent, Listener, Propagation,
    SearchController, WidgetState,
};

#[test]
fn opening_builds_the_index_lazily() {
    let store = site_store();
    let widget = SearchController::new(store.clone(), HtmlListRenderer::new());
    assert!(!store.is_built());
    drop(widget);

    let _widget = open_widget(store.clone());
    assert!(store.is_built());
}

#[test]
fn opening_click_does_not_close() {
    let mut widget = SearchController::new(recipe_store(), HtmlListRenderer::new());
    let click = ClickEvent::new(EventTarget::Input);

    // The host only forwards the click to the document when not stopped
    if !widget.open(&click).is_stopped() {
        widget.on_document_click(&click);
    }
    assert_eq!(widget.state(), WidgetState::OpenEmpty);
}

#[test]
fn outside_click_closes_and_detaches_everything() {
    let mut widget = open_widget(recipe_store());
    type_query(&mut widget, "recipe");
    press(&mut widget, Key::ArrowDown);

    let prop = widget.on_document_click(&ClickEvent::new(EventTarget::Outside));
    assert_eq!(prop, Propagation::Continue);
    assert_eq!(widget.state(), WidgetState::Closed);
    assert!(widget.results().is_empty());
    assert_eq!(widget.focus(), Focus::Input);
    for listener in Listener::ALL {
        assert!(!widget.listeners().is_attached(listener));
    }
    assert!(!widget.renderer().is_visible());
    assert!(widget.renderer().rows().is_empty());
}

#[test]
fn closed_widget_ignores_keys() {
    let mut widget = open_widget(recipe_store());
    widget.close();

    type_query(&mut widget, "recipe");
    assert!(widget.results().is_empty());
    assert_eq!(press(&mut widget, Key::Escape), Propagation::Continue);
}

#[test]
fn open_close_cycles_do_not_stack_listeners() {
    let mut widget = SearchController::new(recipe_store(), HtmlListRenderer::new());
    for _ in 0..5 {
        widget.open(&ClickEvent::new(EventTarget::Input));
        widget.open(&ClickEvent::new(EventTarget::Input));
        assert_eq!(widget.listeners().attached(), Listener::ALL.to_vec());
        widget.on_document_click(&ClickEvent::new(EventTarget::Outside));
        assert!(widget.listeners().is_empty());
    }
}

#[test]
fn reopening_starts_empty() {
    let mut widget = open_widget(recipe_store());
    type_query(&mut widget, "recipe");
    press(&mut widget, Key::Escape);

    widget.open(&ClickEvent::new(EventTarget::Input));
    assert_eq!(widget.state(), WidgetState::OpenEmpty);
    assert!(widget.results().is_empty());
}

#[test]
fn missing_dropdown_is_not_fatal() {
    let store = recipe_store();
    let mut widget = SearchController::new(store, HtmlListRenderer::detached());

    assert_eq!(
        widget.open(&ClickEvent::new(EventTarget::Input)),
        Propagation::Stop
    );
    assert_eq!(widget.state(), WidgetState::Closed);
    assert!(widget.listeners().is_empty());
    widget
        .on_key_up(&KeyEvent::new(Key::Char('r'), EventTarget::Input), "recipe")
        .unwrap();
    assert!(widget.results().is_empty());
}

#[test]
fn navigation_keys_stop_propagation_others_continue() {
    let mut widget = open_widget(recipe_store());
    type_query(&mut widget, "recipe");

    assert_eq!(press(&mut widget, Key::ArrowDown), Propagation::Stop);
    assert_eq!(press(&mut widget, Key::ArrowUp), Propagation::Stop);
    assert_eq!(press(&mut widget, Key::Enter), Propagation::Continue);
    assert_eq!(press(&mut widget, Key::Char('q')), Propagation::Continue);
    assert_eq!(press(&mut widget, Key::Escape), Propagation::Stop);
}

#[test]
fn key_down_elsewhere_on_page_is_ignored() {
    let mut widget = open_widget(recipe_store());
    type_query(&mut widget, "recipe");
    let prop = widget.on_key_down(&KeyEvent::new(Key::ArrowDown, EventTarget::Outside));
    assert_eq!(prop, Propagation::Continue);
    assert_eq!(widget.focus(), Focus::Input);
}

#[test]
fn focus_follows_the_event_target() {
    let mut widget = open_widget(recipe_store());
    type_query(&mut widget, "recipe");
    assert_eq!(widget.results().len(), 2);

    // Focus moved to row 1 by mouse; ArrowUp goes to row 0
    widget.on_key_down(&KeyEvent::new(Key::ArrowUp, EventTarget::ResultRow(1)));
    assert_eq!(widget.focus(), Focus::Result(0));
}

#[test]
fn rendered_rows_use_ordinal_ids() {
    let mut widget = open_widget(recipe_store());
    type_query(&mut widget, "recipe");
    let html = widget.renderer().html();
    assert!(html.contains("id=\"result-0\""));
    assert!(html.contains("id=\"result-1\""));
    assert!(!html.contains("id=\"result-2\""));
}
