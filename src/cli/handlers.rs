// src/cli/handlers.rs
//! Command handlers: load config and dataset, run the engine, report.

use crate::config::{self, Config};
use crate::dataset;
use crate::engine::SearchEngine;
use crate::exit::LinkrankExit;
use crate::reporting::{self, console, SearchReport};
use crate::shell;
use anyhow::{Context, Result};
use colored::Colorize;
use std::cmp::Ordering;
use std::path::Path;

/// Startup sequence shared by every command: load config and dataset
/// from `data_dir`, then run propagation and scoring once.
fn boot(data_dir: &Path) -> Result<(Config, SearchEngine)> {
    let config = Config::load(data_dir)?;
    let store = dataset::load(&config.dataset).context("Failed to load dataset")?;
    if config.preferences.verbose {
        eprintln!("Loaded {} links from {}", store.len(), data_dir.display());
    }
    let mut engine = SearchEngine::new(store);
    engine.run_propagation();
    Ok((config, engine))
}

pub fn handle_shell(data_dir: &Path) -> Result<LinkrankExit> {
    let (config, mut engine) = boot(data_dir)?;
    shell::run(&mut engine, &config)?;
    Ok(LinkrankExit::Success)
}

/// One-shot search. Exits `NoResults` when nothing matched, so scripts
/// can branch on the code without parsing output.
pub fn handle_search(
    data_dir: &Path,
    query: &str,
    json: bool,
    no_persist: bool,
) -> Result<LinkrankExit> {
    let (config, mut engine) = boot(data_dir)?;
    let matches = engine.query(query);

    if !no_persist && config.preferences.auto_persist {
        dataset::persist_counters(&config.dataset, engine.store())
            .context("Failed to persist counters")?;
    }

    let rows = reporting::rows_for(engine.store(), &matches);
    if json {
        let report = SearchReport {
            query: query.to_string(),
            matches: rows,
        };
        reporting::print_json(&report)?;
    } else {
        console::print_search_results(query, &rows);
    }

    Ok(if matches.is_empty() {
        LinkrankExit::NoResults
    } else {
        LinkrankExit::Success
    })
}

pub fn handle_rank(data_dir: &Path, json: bool) -> Result<LinkrankExit> {
    let (_config, engine) = boot(data_dir)?;
    let mut rows = reporting::link_rows(engine.store());
    rows.sort_by(|a, b| b.rank.partial_cmp(&a.rank).unwrap_or(Ordering::Equal));

    if json {
        reporting::print_json(&rows)?;
    } else {
        console::print_rank_table(&rows);
    }
    Ok(LinkrankExit::Success)
}

pub fn handle_stats(data_dir: &Path, json: bool) -> Result<LinkrankExit> {
    let (_config, engine) = boot(data_dir)?;
    let rows = reporting::link_rows(engine.store());

    if json {
        reporting::print_json(&rows)?;
    } else {
        console::print_stats_table(&rows);
    }
    Ok(LinkrankExit::Success)
}

/// Writes a default config file; an existing one is left untouched.
pub fn handle_init(data_dir: &Path) -> Result<LinkrankExit> {
    if data_dir.join(config::io::CONFIG_FILE).exists() {
        println!("{}", "linkrank.toml already exists".yellow());
        return Ok(LinkrankExit::Success);
    }
    let path = config::io::write_default_config(data_dir)?;
    println!("{}", format!("Created {}", path.display()).dimmed());
    Ok(LinkrankExit::Success)
}
