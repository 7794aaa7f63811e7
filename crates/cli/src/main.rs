//! docsearch: search a documentation site from the terminal.
//!
//! Three modes:
//! - **Shell mode**: `docsearch [flags] query TEXT` (single search, exit)
//! - **REPL mode**: `docsearch [flags]` drives the dropdown interactively
//! - **Pipe mode**: `echo helm | docsearch` runs REPL lines from stdin

mod commands;
mod format;
mod parse;
mod render;
mod repl;
mod state;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::Context;
use docsearch_engine::{open_store, DocsearchConfig, IndexStore, CONFIG_FILE_NAME};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_results, OutputMode};
use state::SessionState;

fn main() {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DOCSEARCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    // Handle `init-config` before loading any corpus.
    if let Some(("init-config", sub)) = matches.subcommand() {
        let path = sub
            .get_one::<String>("path")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        process::exit(run_init_config(&path, output_mode));
    }

    let store = match load_store(&matches) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}", format_error(&format!("{:#}", e), output_mode));
            process::exit(1);
        }
    };

    match matches.subcommand() {
        Some(("query", sub)) => {
            let text = sub
                .get_many::<String>("text")
                .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            process::exit(run_query(&store, &text, output_mode));
        }
        _ => {
            let mut state = SessionState::new(store);
            if std::io::stdin().is_terminal() {
                if let Err(e) = repl::run_repl(&mut state, output_mode) {
                    eprintln!("{}", format_error(&e, output_mode));
                    process::exit(1);
                }
            } else {
                process::exit(repl::run_pipe(&mut state, output_mode));
            }
        }
    }
}

/// Resolve config and corpus from flags, then open the store.
fn load_store(matches: &clap::ArgMatches) -> anyhow::Result<Arc<IndexStore>> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => DocsearchConfig::from_file(Path::new(path))?,
        None => DocsearchConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?,
    };
    if let Some(corpus) = matches.get_one::<String>("corpus") {
        config.corpus = Some(PathBuf::from(corpus));
    }

    let source = config
        .corpus
        .as_ref()
        .map_or_else(|| "bundled site pages".to_string(), |p| p.display().to_string());
    tracing::debug!(target: "docsearch::cli", source = %source, "opening store");
    open_store(&config).with_context(|| format!("Failed to load corpus from {}", source))
}

fn run_query(store: &IndexStore, text: &str, mode: OutputMode) -> i32 {
    store.ensure_built();
    match store.search(text) {
        Ok(results) => {
            println!("{}", format_results(&results, mode));
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}

fn run_init_config(path: &Path, mode: OutputMode) -> i32 {
    match DocsearchConfig::write_default_if_missing(path) {
        Ok(true) => {
            println!("Wrote {}", path.display());
            0
        }
        Ok(false) => {
            println!("{} already exists", path.display());
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}
