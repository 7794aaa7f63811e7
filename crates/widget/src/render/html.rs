//! HTML list renderer
//!
//! Keeps the dropdown as a `<ul>` of `<li id="result-N">` rows, the markup
//! the site's stylesheet targets. Rows are only ever appended in order and
//! cleared all at once.

use super::{Focus, RenderCommand, RenderError, ResultRenderer};
use docsearch_core::SearchResult;

const DROPDOWN: &str = "dropdown";

/// Renders the dropdown into an HTML fragment
#[derive(Debug, Clone)]
pub struct HtmlListRenderer {
    attached: bool,
    visible: bool,
    rows: Vec<String>,
    focus: Focus,
}

impl Default for HtmlListRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlListRenderer {
    /// Renderer with a dropdown container present
    pub fn new() -> Self {
        HtmlListRenderer {
            attached: true,
            visible: false,
            rows: Vec::new(),
            focus: Focus::Input,
        }
    }

    /// Renderer whose page has no dropdown container
    ///
    /// Every command addressing the dropdown fails with
    /// `RenderError::MissingTarget`.
    pub fn detached() -> Self {
        HtmlListRenderer {
            attached: false,
            ..Self::new()
        }
    }

    /// Whether the dropdown is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rendered `<li>` rows
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Current focus
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Full dropdown markup
    pub fn html(&self) -> String {
        let class = if self.visible {
            "dropdown-content show"
        } else {
            "dropdown-content"
        };
        format!("<ul class=\"{}\">{}</ul>", class, self.rows.concat())
    }

    fn dropdown(&self) -> Result<(), RenderError> {
        if self.attached {
            Ok(())
        } else {
            Err(RenderError::MissingTarget(DROPDOWN.to_string()))
        }
    }

    /// Rows can only be written while the dropdown is shown
    fn shown_dropdown(&self) -> Result<(), RenderError> {
        self.dropdown()?;
        if self.visible {
            Ok(())
        } else {
            Err(RenderError::MissingTarget(format!("{} (hidden)", DROPDOWN)))
        }
    }
}

impl ResultRenderer for HtmlListRenderer {
    fn apply(&mut self, command: RenderCommand<'_>) -> Result<(), RenderError> {
        match command {
            RenderCommand::Show => {
                self.dropdown()?;
                self.visible = true;
            }
            RenderCommand::Hide => {
                self.dropdown()?;
                self.visible = false;
            }
            RenderCommand::Clear => {
                self.shown_dropdown()?;
                self.rows.clear();
                self.focus = Focus::Input;
            }
            RenderCommand::Append { ordinal, result } => {
                self.shown_dropdown()?;
                debug_assert_eq!(ordinal, self.rows.len(), "rows appended out of order");
                self.rows.push(row_markup(ordinal, result));
            }
            RenderCommand::Focus(Focus::Input) => {
                self.focus = Focus::Input;
            }
            RenderCommand::Focus(Focus::Result(i)) => {
                if i >= self.rows.len() {
                    return Err(RenderError::MissingTarget(format!("result-{}", i)));
                }
                self.focus = Focus::Result(i);
            }
        }
        Ok(())
    }
}

fn row_markup(ordinal: usize, result: &SearchResult) -> String {
    let title = escape(&result.title);
    format!(
        "<li class=\"dropdown-item\" id=\"result-{}\">\
         <a title=\"{}\" href=\"{}\" class=\"dropdown-item-link\">\
         <span class=\"dropdown-item-link-text\">{}</span></a></li>",
        ordinal,
        title,
        escape(&result.url),
        title
    )
}

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
