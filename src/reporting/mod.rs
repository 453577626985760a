// src/reporting/mod.rs
//! Report rows shared by the console and JSON renderers.

pub mod console;
pub mod json;

pub use json::print_json;

use crate::store::LinkStore;
use serde::Serialize;

/// One link's reportable state.
#[derive(Debug, Clone, Serialize)]
pub struct LinkRow {
    pub id: String,
    pub rank: f64,
    pub ctr: f64,
    pub score: f64,
    pub impressions: u64,
    pub clicks: u64,
}

/// Search output for `--json`: the raw query plus matches in result
/// order (ascending score).
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub matches: Vec<LinkRow>,
}

/// Rows for every link, in store order.
#[must_use]
pub fn link_rows(store: &LinkStore) -> Vec<LinkRow> {
    store
        .links()
        .map(|(id, link)| LinkRow {
            id: id.clone(),
            rank: link.rank(),
            ctr: link.ctr(),
            score: link.score(),
            impressions: link.impressions(),
            clicks: link.clicks(),
        })
        .collect()
}

/// Rows for the given ids, preserving their order. Ids missing from the
/// store are skipped.
#[must_use]
pub fn rows_for(store: &LinkStore, ids: &[String]) -> Vec<LinkRow> {
    ids.iter()
        .filter_map(|id| {
            store.get(id).map(|link| LinkRow {
                id: id.clone(),
                rank: link.rank(),
                ctr: link.ctr(),
                score: link.score(),
                impressions: link.impressions(),
                clicks: link.clicks(),
            })
        })
        .collect()
}
