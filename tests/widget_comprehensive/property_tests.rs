//! Tier 5: Property-based tests

use crate::test_utils::*;
use docsearch::{Focus, Key, WidgetState};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "recipe", "deploy", "ingress", "manifest", "akka", "cluster", "helm", "service",
    "namespace", "gitlab", "settings", "zzzznomatch", "the", "+ingress", "-helm", "title:akka",
    "manif*", "chart^3",
];

fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 1..4).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn property_results_resolve_through_mapping(q in query()) {
        let store = built_site_store();
        for result in store.search(&q).unwrap() {
            prop_assert_eq!(store.url_for(&result.title), Some(result.url.as_str()));
        }
    }

    #[test]
    fn property_search_is_repeatable(q in query()) {
        let store = built_site_store();
        let first = store.search(&q).unwrap();
        prop_assert_eq!(store.search(&q).unwrap(), first);
    }

    #[test]
    fn property_arbitrary_text_never_fails(q in "\\PC{0,40}") {
        let store = built_site_store();
        prop_assert!(store.search(&q).is_ok());
    }

    #[test]
    fn property_arrow_down_walks_then_stays(q in query(), presses in 1usize..15) {
        let mut widget = open_widget(site_store());
        type_query(&mut widget, &q);
        let n = widget.results().len();

        for k in 1..=presses {
            press(&mut widget, Key::ArrowDown);
            if n == 0 {
                prop_assert_eq!(widget.focus(), Focus::Input);
            } else {
                prop_assert_eq!(widget.focus(), Focus::Result((k - 1).min(n - 1)));
            }
        }
    }

    #[test]
    fn property_rendered_rows_mirror_results(q in query()) {
        let mut widget = open_widget(site_store());
        type_query(&mut widget, &q);
        prop_assert_eq!(widget.renderer().rows().len(), widget.results().len());
        prop_assert_eq!(widget.state(), WidgetState::OpenResults);
    }

    #[test]
    fn property_escape_always_closes(q in query(), downs in 0usize..8) {
        let mut widget = open_widget(site_store());
        type_query(&mut widget, &q);
        for _ in 0..downs {
            press(&mut widget, Key::ArrowDown);
        }
        press(&mut widget, Key::Escape);
        prop_assert_eq!(widget.state(), WidgetState::Closed);
        prop_assert!(widget.listeners().is_empty());
    }
}
