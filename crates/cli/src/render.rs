//! Terminal rendering surface.
//!
//! Mirrors the dropdown in memory; `format` turns it into text after every
//! REPL step.

use docsearch_core::SearchResult;
use docsearch_widget::{Focus, RenderCommand, RenderError, ResultRenderer};

/// In-memory dropdown drawn to the terminal.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    visible: bool,
    rows: Vec<SearchResult>,
    focus: Focus,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn rows(&self) -> &[SearchResult] {
        &self.rows
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }
}

impl ResultRenderer for TerminalRenderer {
    fn apply(&mut self, command: RenderCommand<'_>) -> Result<(), RenderError> {
        match command {
            RenderCommand::Show => self.visible = true,
            RenderCommand::Hide => self.visible = false,
            RenderCommand::Clear => {
                self.rows.clear();
                self.focus = Focus::Input;
            }
            RenderCommand::Append { result, .. } => self.rows.push(result.clone()),
            RenderCommand::Focus(Focus::Result(i)) if i >= self.rows.len() => {
                return Err(RenderError::MissingTarget(format!("row {}", i + 1)));
            }
            RenderCommand::Focus(focus) => self.focus = focus,
        }
        Ok(())
    }
}
