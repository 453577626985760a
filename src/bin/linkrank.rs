use clap::Parser;
use colored::Colorize;
use linkrank_core::cli::{self, Cli};
use linkrank_core::exit::LinkrankExit;
use std::path::PathBuf;

fn main() -> LinkrankExit {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(|| PathBuf::from("."));

    match cli::dispatch::execute(cli.command, &data_dir) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            LinkrankExit::Error
        }
    }
}
