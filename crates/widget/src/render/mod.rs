//! Rendering collaborator
//!
//! The controller never touches markup. It issues [`RenderCommand`]s to a
//! [`ResultRenderer`], which materializes them in whatever surface the host
//! has: a DOM, a terminal, or a string buffer.

pub mod html;

pub use html::HtmlListRenderer;

use docsearch_core::SearchResult;
use thiserror::Error;

/// Where keyboard focus sits inside the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The query input field
    #[default]
    Input,
    /// The result row at this ordinal
    Result(usize),
}

impl Focus {
    /// Ordinal of the focused row, if a row is focused
    pub fn ordinal(&self) -> Option<usize> {
        match self {
            Focus::Input => None,
            Focus::Result(i) => Some(*i),
        }
    }
}

/// A single instruction to the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCommand<'a> {
    /// Make the dropdown visible
    Show,
    /// Hide the dropdown
    Hide,
    /// Remove every rendered row
    Clear,
    /// Append a row at the end of the list
    Append {
        /// Position of the row; equals the number of rows already rendered
        ordinal: usize,
        /// The result to display
        result: &'a SearchResult,
    },
    /// Move keyboard focus
    Focus(Focus),
}

/// Rendering failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The element a command addresses does not exist
    #[error("render target missing: {0}")]
    MissingTarget(String),
}

/// Surface that materializes render commands
pub trait ResultRenderer {
    /// Apply one command
    ///
    /// # Errors
    ///
    /// `RenderError::MissingTarget` when the addressed element is absent.
    /// Callers treat this as "nothing to do".
    fn apply(&mut self, command: RenderCommand<'_>) -> Result<(), RenderError>;
}

impl<R: ResultRenderer + ?Sized> ResultRenderer for Box<R> {
    fn apply(&mut self, command: RenderCommand<'_>) -> Result<(), RenderError> {
        (**self).apply(command)
    }
}

impl<R: ResultRenderer + ?Sized> ResultRenderer for &mut R {
    fn apply(&mut self, command: RenderCommand<'_>) -> Result<(), RenderError> {
        (**self).apply(command)
    }
}
