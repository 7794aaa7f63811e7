//! Session wrapper around the search controller.
//!
//! Owns the controller and the text of the simulated search box, and turns
//! REPL meta-commands into the UI events a browser would deliver.

use std::sync::Arc;

use docsearch_core::{Result, SearchResult};
use docsearch_engine::IndexStore;
use docsearch_widget::{
    ClickEvent, EventTarget, Focus, Key, KeyEvent, SearchController, WidgetState,
};

use crate::parse::MetaCommand;
use crate::render::TerminalRenderer;

/// What the REPL should print after a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The dropdown may have changed
    View,
    /// Enter was pressed; carries the focused result, if any
    Selected(Option<SearchResult>),
    Help,
    Quit,
}

/// Interactive search session.
pub struct SessionState {
    controller: SearchController<TerminalRenderer>,
    input: String,
}

impl SessionState {
    pub fn new(store: Arc<IndexStore>) -> Self {
        Self {
            controller: SearchController::new(store, TerminalRenderer::new()),
            input: String::new(),
        }
    }

    pub fn controller(&self) -> &SearchController<TerminalRenderer> {
        &self.controller
    }

    /// Current search box text.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn prompt(&self) -> String {
        match self.controller.state() {
            WidgetState::Closed => "docsearch> ".to_string(),
            _ if self.input.is_empty() => "docsearch [ ]> ".to_string(),
            _ => format!("docsearch [{}]> ", self.input),
        }
    }

    /// Replace the search box content, as if the last key was just released.
    ///
    /// Typing needs a focused box, so a closed widget is opened first.
    pub fn type_text(&mut self, text: &str) -> Result<Outcome> {
        if !self.controller.state().is_open() {
            self.controller.open(&ClickEvent::new(EventTarget::Input));
        }
        self.input = text.to_string();
        let key = self.input.chars().last().map_or(Key::Backspace, Key::Char);
        self.controller
            .on_key_up(&KeyEvent::new(key, EventTarget::Input), &self.input)?;
        Ok(Outcome::View)
    }

    /// Apply a meta-command.
    pub fn execute(&mut self, meta: MetaCommand) -> Result<Outcome> {
        match meta {
            MetaCommand::Open => {
                self.controller.open(&ClickEvent::new(EventTarget::Input));
            }
            MetaCommand::Down => self.key_down(Key::ArrowDown),
            MetaCommand::Up => self.key_down(Key::ArrowUp),
            MetaCommand::Esc => self.key_down(Key::Escape),
            MetaCommand::Click => {
                self.controller
                    .on_document_click(&ClickEvent::new(EventTarget::Outside));
            }
            MetaCommand::Enter => {
                self.key_down(Key::Enter);
                return Ok(Outcome::Selected(self.controller.selected().cloned()));
            }
            MetaCommand::Clear => {
                self.input.clear();
                self.controller
                    .on_key_up(&KeyEvent::new(Key::Backspace, EventTarget::Input), "")?;
            }
            MetaCommand::Show => {}
            MetaCommand::Help => return Ok(Outcome::Help),
            MetaCommand::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::View)
    }

    /// Press a key on whatever currently has focus.
    fn key_down(&mut self, key: Key) {
        let target = match self.controller.focus() {
            Focus::Input => EventTarget::Input,
            Focus::Result(i) => EventTarget::ResultRow(i),
        };
        self.controller.on_key_down(&KeyEvent::new(key, target));
    }
}
