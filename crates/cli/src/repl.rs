//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use crate::format::{format_error, format_selection, format_view, OutputMode};
use crate::parse::{parse_line, ReplAction, META_COMMANDS};
use crate::state::{Outcome, SessionState};

/// Run the interactive REPL.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<DocsearchHelper, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(DocsearchHelper));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    println!("Type to search, :help for commands.");
    loop {
        match rl.readline(&state.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if !execute_line(trimmed, state, mode).unwrap_or(true) {
                    break;
                }
            }
            // Ctrl-C: just show a new prompt
            Err(ReadlineError::Interrupted) => continue,
            // Ctrl-D
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
    Ok(())
}

/// Run in pipe mode: read lines from stdin, execute each.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match execute_line(trimmed, state, mode) {
            Ok(true) => {}
            Ok(false) => break,
            Err(()) => exit_code = 1,
        }
    }

    exit_code
}

/// Execute one line and print its effect.
///
/// Returns `Ok(false)` when the session should end, `Err(())` after an error
/// has been reported.
fn execute_line(line: &str, state: &mut SessionState, mode: OutputMode) -> Result<bool, ()> {
    let action = parse_line(line).map_err(|msg| {
        eprintln!("{}", format_error(&msg, mode));
    })?;

    let outcome = match action {
        ReplAction::Type(text) => state.type_text(&text),
        ReplAction::Meta(meta) => state.execute(meta),
    }
    .map_err(|e| {
        eprintln!("{}", format_error(&e, mode));
    })?;

    match outcome {
        Outcome::Quit => return Ok(false),
        Outcome::Help => print_help(),
        Outcome::Selected(selected) => println!("{}", format_selection(selected.as_ref(), mode)),
        Outcome::View => {
            let c = state.controller();
            println!(
                "{}",
                format_view(c.state(), state.input(), c.renderer(), mode)
            );
        }
    }
    Ok(true)
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.docsearch_history", h))
}

fn print_help() {
    println!("Type any text to search for it. Query syntax:");
    println!("  +term       term is required");
    println!("  -term       term must not appear");
    println!("  title:term  match in the title only");
    println!("  term*       prefix match");
    println!("  term^10     boost a term");
    println!();
    println!("Meta-commands:");
    println!("  :open       Click the search box");
    println!("  :down :up   Move through the results");
    println!("  :esc        Close the dropdown");
    println!("  :click      Click outside the dropdown");
    println!("  :enter      Follow the focused result");
    println!("  :clear      Empty the search box");
    println!("  :show       Print the dropdown");
    println!("  :help       Show help");
    println!("  :quit       Exit REPL");
}

// =========================================================================
// TAB Completion
// =========================================================================

struct DocsearchHelper;

impl Helper for DocsearchHelper {}
impl Validator for DocsearchHelper {}
impl Highlighter for DocsearchHelper {}
impl Hinter for DocsearchHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for DocsearchHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // Only meta-commands complete; search text is free-form
        if !prefix.starts_with(':') || prefix.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }
        let candidates = META_COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}
