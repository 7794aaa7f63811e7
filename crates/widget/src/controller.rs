//! Search dropdown controller
//!
//! `SearchController` is the state machine behind the search box. Host
//! adapters feed it UI events; it queries the [`IndexStore`], keeps the
//! result list and focus cursor, and tells a [`ResultRenderer`] what to draw.
//!
//! ```text
//!            open              key-up (non-empty)
//!   Closed ───────▶ OpenEmpty ───────────────────▶ OpenResults
//!     ▲               ▲  ▲                            │  │
//!     │               │  └──── key-up (empty) ────────┘  │
//!     └── close / Escape / outside click ────────────────┘
//! ```

use crate::event::{ClickEvent, EventTarget, Key, KeyEvent, Propagation};
use crate::listener::{Listener, ListenerSet};
use crate::render::{Focus, RenderCommand, RenderError, ResultRenderer};
use docsearch_core::{Result, SearchResult};
use docsearch_engine::IndexStore;
use std::sync::Arc;
use tracing::{debug, error};

/// Widget lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Dropdown hidden, no listeners attached
    #[default]
    Closed,
    /// Dropdown shown, no results
    OpenEmpty,
    /// Dropdown shown with the results of the last query
    OpenResults,
}

impl WidgetState {
    /// Whether the dropdown is shown
    pub fn is_open(&self) -> bool {
        !matches!(self, WidgetState::Closed)
    }
}

/// Event-driven controller for the search dropdown
pub struct SearchController<R: ResultRenderer> {
    store: Arc<IndexStore>,
    renderer: R,
    state: WidgetState,
    results: Vec<SearchResult>,
    focus: Focus,
    listeners: ListenerSet,
}

impl<R: ResultRenderer> SearchController<R> {
    /// Create a closed controller over a shared store
    pub fn new(store: Arc<IndexStore>, renderer: R) -> Self {
        SearchController {
            store,
            renderer,
            state: WidgetState::Closed,
            results: Vec::new(),
            focus: Focus::Input,
            listeners: ListenerSet::default(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current state
    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Results of the last query, in engine order
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Current focus
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The focused result, if a row has focus
    pub fn selected(&self) -> Option<&SearchResult> {
        self.focus.ordinal().and_then(|i| self.results.get(i))
    }

    /// Listeners currently attached
    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    /// The shared store
    pub fn store(&self) -> &Arc<IndexStore> {
        &self.store
    }

    /// The rendering surface
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the rendering surface
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    // ========================================================================
    // Event handlers
    // ========================================================================

    /// Click on the search box
    ///
    /// Builds the index on first use, shows the dropdown and attaches the
    /// document listeners. Always returns `Propagation::Stop` so the opening
    /// click never reaches the outside-click handler.
    pub fn open(&mut self, event: &ClickEvent) -> Propagation {
        if self.state.is_open() {
            if event.target == EventTarget::Input {
                return Propagation::Stop;
            }
            self.close();
        }

        self.store.ensure_built();

        if !self.render(RenderCommand::Show) {
            // No dropdown on this page: stay closed with nothing attached
            return Propagation::Stop;
        }
        self.listeners.attach_all();
        self.state = WidgetState::OpenEmpty;
        self.focus = Focus::Input;
        debug!(target: "docsearch::widget", "opened");
        Propagation::Stop
    }

    /// Key released
    ///
    /// Re-runs the query from `input` unless the key only navigates.
    ///
    /// # Errors
    ///
    /// Propagates index store failures from the query.
    pub fn on_key_up(&mut self, event: &KeyEvent, input: &str) -> Result<Propagation> {
        if !self.listeners.is_attached(Listener::KeyUp)
            || event.target != EventTarget::Input
            || event.key.is_navigation()
        {
            return Ok(Propagation::Continue);
        }
        self.on_query_changed(input)?;
        Ok(Propagation::Continue)
    }

    /// The query input now reads `input`
    ///
    /// Empty input clears the list; anything else replaces it with fresh
    /// results. No effect while closed.
    ///
    /// # Errors
    ///
    /// Propagates index store failures from the query.
    pub fn on_query_changed(&mut self, input: &str) -> Result<()> {
        if !self.state.is_open() {
            return Ok(());
        }

        if input.is_empty() {
            self.replace_results(Vec::new());
            self.state = WidgetState::OpenEmpty;
            debug!(target: "docsearch::widget", "query cleared");
            return Ok(());
        }

        let results = self.store.search(input).map_err(|e| {
            error!(target: "docsearch::widget", error = %e, "query failed");
            e
        })?;
        debug!(
            target: "docsearch::widget",
            query = input,
            results = results.len(),
            "results replaced"
        );
        self.replace_results(results);
        self.state = WidgetState::OpenResults;
        Ok(())
    }

    /// Key pressed
    ///
    /// ArrowDown and ArrowUp move focus through the list without wrapping;
    /// Escape closes. These three keys return `Propagation::Stop`.
    pub fn on_key_down(&mut self, event: &KeyEvent) -> Propagation {
        if !self.listeners.is_attached(Listener::KeyDown) {
            return Propagation::Continue;
        }
        let from = match event.target {
            EventTarget::Input => Focus::Input,
            EventTarget::ResultRow(i) if i < self.results.len() => Focus::Result(i),
            _ => return Propagation::Continue,
        };
        // Focus may have moved without us (mouse, tab)
        self.focus = from;

        match event.key {
            Key::ArrowDown => {
                let next = match from {
                    Focus::Input => 0,
                    Focus::Result(i) => i + 1,
                };
                if next < self.results.len() {
                    self.move_focus(Focus::Result(next));
                }
                Propagation::Stop
            }
            Key::ArrowUp => {
                if let Focus::Result(i) = from {
                    if i > 0 {
                        self.move_focus(Focus::Result(i - 1));
                    }
                }
                Propagation::Stop
            }
            Key::Escape => {
                self.close();
                Propagation::Stop
            }
            _ => Propagation::Continue,
        }
    }

    /// Click anywhere on the page
    ///
    /// Closes the widget when the click lands outside it.
    pub fn on_document_click(&mut self, event: &ClickEvent) -> Propagation {
        if self.listeners.is_attached(Listener::OutsideClick) && !event.target.is_inside() {
            self.close();
        }
        Propagation::Continue
    }

    /// Hide the dropdown, drop results and detach every listener
    pub fn close(&mut self) {
        if !self.state.is_open() && self.listeners.is_empty() {
            return;
        }
        self.render(RenderCommand::Clear);
        self.render(RenderCommand::Hide);
        self.results.clear();
        self.focus = Focus::Input;
        self.listeners.detach_all();
        self.state = WidgetState::Closed;
        debug!(target: "docsearch::widget", "closed");
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn replace_results(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.focus = Focus::Input;
        if !self.render(RenderCommand::Clear) {
            return;
        }
        for (ordinal, result) in self.results.iter().enumerate() {
            if let Err(e) = self.renderer.apply(RenderCommand::Append { ordinal, result }) {
                skipped(&e);
                return;
            }
        }
    }

    fn move_focus(&mut self, to: Focus) {
        if self.render(RenderCommand::Focus(to)) {
            self.focus = to;
        }
    }

    /// Apply a command, treating a missing target as nothing to do
    fn render(&mut self, command: RenderCommand<'_>) -> bool {
        match self.renderer.apply(command) {
            Ok(()) => true,
            Err(e) => {
                skipped(&e);
                false
            }
        }
    }
}

fn skipped(e: &RenderError) {
    debug!(target: "docsearch::widget", error = %e, "render skipped");
}
