// src/reporting/console.rs
//! Console tables for search results, rankings and per-link counters.

use super::LinkRow;
use colored::Colorize;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

/// Prints the ranked result list for one query. Results arrive in
/// engine order (ascending score) and are numbered from 1.
pub fn print_search_results(query: &str, rows: &[LinkRow]) {
    println!();
    println!("{}", rule().dimmed());
    println!("{}", " SEARCH RESULTS".bold());
    println!("{}", rule().dimmed());
    println!();
    println!("  {} {query}", "Query:".white());
    println!("  {} {}", "Matches:".white(), rows.len());
    println!();

    if rows.is_empty() {
        println!("  {}", "No results.".yellow());
    } else {
        for (index, row) in rows.iter().enumerate() {
            println!(
                "  {} {}  {}",
                format!("{:>3}.", index + 1).dimmed(),
                row.id,
                format!("score {:.4}", row.score).dimmed()
            );
        }
    }

    println!();
    println!("{}", rule().dimmed());
}

/// Prints every link's normalized rank, most important first.
pub fn print_rank_table(rows: &[LinkRow]) {
    println!();
    println!("{}", rule().dimmed());
    println!("{}", " RANK REPORT".bold());
    println!("{}", rule().dimmed());
    println!();
    println!("  {} {}", "Links:".white(), rows.len());
    println!();

    for row in rows {
        println!("  {}  {}", format!("{:.4}", row.rank).cyan(), row.id);
    }

    println!();
    println!("{}", rule().dimmed());
}

/// Prints the full counter/metric table in store order.
pub fn print_stats_table(rows: &[LinkRow]) {
    println!();
    println!("{}", rule().dimmed());
    println!("{}", " LINK STATS".bold());
    println!("{}", rule().dimmed());
    println!();
    println!("  {} {}", "Links:".white(), rows.len());
    println!();
    println!(
        "  {}",
        format!(
            "{:<24} {:>8} {:>8} {:>8} {:>6} {:>6}",
            "ID", "RANK", "CTR", "SCORE", "IMPR", "CLICKS"
        )
        .white()
    );

    for row in rows {
        println!(
            "  {:<24} {:>8.4} {:>8.4} {:>8.4} {:>6} {:>6}",
            row.id, row.rank, row.ctr, row.score, row.impressions, row.clicks
        );
    }

    println!();
    println!("{}", rule().dimmed());
}
