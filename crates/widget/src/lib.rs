//! Search dropdown widget for docsearch
//!
//! This crate provides:
//! - SearchController: open/close lifecycle, query on key-up, arrow navigation
//! - Event types host adapters translate native events into
//! - ResultRenderer: the rendering seam, with an HTML list implementation
//!
//! # Usage
//!
//! ```
//! use docsearch_engine::{open_store, DocsearchConfig};
//! use docsearch_widget::{
//!     ClickEvent, EventTarget, HtmlListRenderer, Key, KeyEvent, SearchController,
//! };
//!
//! let store = open_store(&DocsearchConfig::default()).unwrap();
//! let mut widget = SearchController::new(store, HtmlListRenderer::new());
//!
//! widget.open(&ClickEvent::new(EventTarget::Input));
//! widget
//!     .on_key_up(&KeyEvent::new(Key::Char('m'), EventTarget::Input), "helm")
//!     .unwrap();
//! widget.on_key_down(&KeyEvent::new(Key::ArrowDown, EventTarget::Input));
//!
//! assert_eq!(widget.selected().unwrap().url, "/helm/");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
pub mod event;
pub mod listener;
pub mod render;

pub use controller::{SearchController, WidgetState};
pub use event::{ClickEvent, EventTarget, Key, KeyEvent, Propagation};
pub use listener::{Listener, ListenerSet};
pub use render::{Focus, HtmlListRenderer, RenderCommand, RenderError, ResultRenderer};
