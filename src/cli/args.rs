// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "Link-graph search engine simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Directory holding the dataset files and linkrank.toml
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one query and print the ranked results
    Search {
        /// Query text: `"quoted phrase"` or space-separated terms,
        /// with `and`/`or` picking the boolean mode
        query: String,
        #[arg(long)]
        json: bool,
        /// Skip rewriting the counter files
        #[arg(long)]
        no_persist: bool,
    },
    /// Print every link's propagated rank, most important first
    Rank {
        #[arg(long)]
        json: bool,
    },
    /// Print per-link counters and derived metrics
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Write a default linkrank.toml into the data directory
    Init,
}
