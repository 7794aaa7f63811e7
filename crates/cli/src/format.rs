//! Results/dropdown → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): numbered list, `>` marks the focused row
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use docsearch_core::SearchResult;
use docsearch_widget::{Focus, WidgetState};
use serde_json::json;

use crate::render::TerminalRenderer;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a ranked result list.
pub fn format_results(results: &[SearchResult], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => pretty(&json!(results)),
        OutputMode::Human => {
            if results.is_empty() {
                return "(empty list)".to_string();
            }
            results
                .iter()
                .enumerate()
                .map(|(i, r)| format!("{}) {}  {}", i + 1, r.title, r.url))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Format the dropdown as the user would currently see it.
pub fn format_view(
    state: WidgetState,
    query: &str,
    screen: &TerminalRenderer,
    mode: OutputMode,
) -> String {
    let rows = if screen.is_visible() { screen.rows() } else { &[] };
    match mode {
        OutputMode::Json => pretty(&json!({
            "state": state_name(state),
            "query": query,
            "focus": screen.focus().ordinal(),
            "results": rows,
        })),
        OutputMode::Human => match state {
            WidgetState::Closed => "(closed)".to_string(),
            WidgetState::OpenEmpty => "(no query)".to_string(),
            WidgetState::OpenResults if rows.is_empty() => "(empty list)".to_string(),
            WidgetState::OpenResults => rows
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    let marker = if screen.focus() == Focus::Result(i) {
                        '>'
                    } else {
                        ' '
                    };
                    format!("{} {}) {}  {}", marker, i + 1, r.title, r.url)
                })
                .collect::<Vec<_>>()
                .join("\n"),
        },
    }
}

/// Format the outcome of pressing Enter.
pub fn format_selection(selected: Option<&SearchResult>, mode: OutputMode) -> String {
    match (mode, selected) {
        (OutputMode::Json, s) => pretty(&json!({ "selected": s })),
        (OutputMode::Human, Some(r)) => format!("-> {}", r.url),
        (OutputMode::Human, None) => "(no selection)".to_string(),
    }
}

/// Format an error.
pub fn format_error(err: &dyn std::fmt::Display, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => pretty(&json!({ "error": err.to_string() })),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn state_name(state: WidgetState) -> &'static str {
    match state {
        WidgetState::Closed => "closed",
        WidgetState::OpenEmpty => "open_empty",
        WidgetState::OpenResults => "open_results",
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
