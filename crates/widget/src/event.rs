//! UI events as the controller sees them
//!
//! Host adapters translate their native events into these types. Targets are
//! positional: a result row is identified by its ordinal in the rendered
//! list, never by an element id.

/// A key, reduced to what the widget distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move focus up the result list
    ArrowUp,
    /// Move focus down the result list
    ArrowDown,
    /// Close the widget
    Escape,
    /// Activate the focused element
    Enter,
    /// Tab focus traversal
    Tab,
    /// Delete backwards
    Backspace,
    /// A printable character
    Char(char),
    /// Anything else (modifiers, function keys, ...)
    Other,
}

impl Key {
    /// Keys that navigate or close and therefore never re-query
    pub fn is_navigation(&self) -> bool {
        matches!(self, Key::ArrowUp | Key::ArrowDown | Key::Escape)
    }

    /// Map a DOM `KeyboardEvent.key` name
    ///
    /// ```
    /// use docsearch_widget::Key;
    ///
    /// assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
    /// assert_eq!(Key::from_name("Esc"), Key::Escape);
    /// assert_eq!(Key::from_name("r"), Key::Char('r'));
    /// assert_eq!(Key::from_name("Shift"), Key::Other);
    /// ```
    pub fn from_name(name: &str) -> Key {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            "Backspace" => Key::Backspace,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }

    /// Map a legacy DOM `keyCode`
    pub fn from_key_code(code: u32) -> Key {
        match code {
            38 => Key::ArrowUp,
            40 => Key::ArrowDown,
            27 => Key::Escape,
            13 => Key::Enter,
            9 => Key::Tab,
            8 => Key::Backspace,
            32..=126 => char::from_u32(code).map(Key::Char).unwrap_or(Key::Other),
            _ => Key::Other,
        }
    }
}

/// Where an event landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// The query input field
    Input,
    /// The rendered result row at this ordinal
    ResultRow(usize),
    /// Inside the dropdown, but not on a row
    Dropdown,
    /// Anywhere else on the page
    Outside,
}

impl EventTarget {
    /// Whether the target is part of the widget
    pub fn is_inside(&self) -> bool {
        !matches!(self, EventTarget::Outside)
    }
}

/// A keydown or keyup event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key pressed or released
    pub key: Key,
    /// Element that had focus
    pub target: EventTarget,
}

impl KeyEvent {
    /// Create a key event
    pub fn new(key: Key, target: EventTarget) -> Self {
        KeyEvent { key, target }
    }
}

/// A click event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Element clicked
    pub target: EventTarget,
}

impl ClickEvent {
    /// Create a click event
    pub fn new(target: EventTarget) -> Self {
        ClickEvent { target }
    }
}

/// What the host should do with the native event after the controller ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Let default handling and bubbling continue
    Continue,
    /// Prevent the default action and stop propagation
    Stop,
}

impl Propagation {
    /// Whether the host must call preventDefault/stopPropagation
    pub fn is_stopped(&self) -> bool {
        matches!(self, Propagation::Stop)
    }
}
