//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("docsearch")
        .about("Search a documentation site from the terminal")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: ./docsearch.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("corpus")
                .long("corpus")
                .help("JSON corpus file, overrides the config")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("query")
                .about("Run one search and print the ranked results")
                .arg(
                    Arg::new("text")
                        .required(true)
                        .num_args(1..)
                        .help("Query text"),
                ),
        )
        .subcommand(
            Command::new("init-config")
                .about("Write a default docsearch.toml if it does not exist")
                .arg(Arg::new("path").help("Target path (default: ./docsearch.toml)")),
        )
}
