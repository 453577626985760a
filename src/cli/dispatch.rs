// src/cli/dispatch.rs
//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::Commands;
use super::handlers;
use crate::exit::LinkrankExit;
use anyhow::Result;
use std::path::Path;

/// Executes the parsed command. No command opens the interactive shell.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Option<Commands>, data_dir: &Path) -> Result<LinkrankExit> {
    match command {
        None => handlers::handle_shell(data_dir),
        Some(Commands::Search {
            query,
            json,
            no_persist,
        }) => handlers::handle_search(data_dir, &query, json, no_persist),
        Some(Commands::Rank { json }) => handlers::handle_rank(data_dir, json),
        Some(Commands::Stats { json }) => handlers::handle_stats(data_dir, json),
        Some(Commands::Init) => handlers::handle_init(data_dir),
    }
}
