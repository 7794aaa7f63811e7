//! REPL line → action conversion.
//!
//! Lines starting with `:` are meta-commands that stand in for UI events.
//! Anything else is the new content of the search box.

/// What a REPL line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    /// Replace the search box content with this text and release a key
    Type(String),
    /// A UI event or REPL control
    Meta(MetaCommand),
}

/// Meta-commands, each standing for one UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    /// Click the search box
    Open,
    /// ArrowDown on the focused element
    Down,
    /// ArrowUp on the focused element
    Up,
    /// Escape on the focused element
    Esc,
    /// Click somewhere outside the widget
    Click,
    /// Enter on the focused element
    Enter,
    /// Empty the search box
    Clear,
    /// Print the dropdown
    Show,
    Help,
    Quit,
}

/// Meta-command names, for help and completion.
pub const META_COMMANDS: &[&str] = &[
    ":open", ":down", ":up", ":esc", ":click", ":enter", ":clear", ":show", ":help", ":quit",
];

/// Parse one REPL line.
///
/// # Errors
///
/// Returns a message for an unknown `:command`.
pub fn parse_line(line: &str) -> Result<ReplAction, String> {
    let Some(name) = line.strip_prefix(':') else {
        return Ok(ReplAction::Type(line.to_string()));
    };
    let meta = match name.trim().to_ascii_lowercase().as_str() {
        "open" => MetaCommand::Open,
        "down" | "j" => MetaCommand::Down,
        "up" | "k" => MetaCommand::Up,
        "esc" | "escape" => MetaCommand::Esc,
        "click" => MetaCommand::Click,
        "enter" => MetaCommand::Enter,
        "clear" => MetaCommand::Clear,
        "show" => MetaCommand::Show,
        "help" | "h" => MetaCommand::Help,
        "quit" | "exit" | "q" => MetaCommand::Quit,
        other => return Err(format!("Unknown command ':{}' (try :help)", other)),
    };
    Ok(ReplAction::Meta(meta))
}
