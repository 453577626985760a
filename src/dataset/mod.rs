// src/dataset/mod.rs
//! Loading and persistence for the four flat CSV files that make up a
//! dataset: the link graph, keywords, impression counts and click counts.

pub mod reader;
pub mod writer;

use crate::config::DatasetConfig;
use crate::error::Result;
use crate::store::LinkStore;

/// Loads all four files into a fresh store: graph first, then the
/// metadata overlays (keywords, impressions, clicks).
pub fn load(paths: &DatasetConfig) -> Result<LinkStore> {
    let mut store = LinkStore::new();
    reader::load_graph(&mut store, &paths.graph)?;
    reader::load_keywords(&mut store, &paths.keywords)?;
    reader::load_impressions(&mut store, &paths.impressions)?;
    reader::load_clicks(&mut store, &paths.clicks)?;
    Ok(store)
}

/// Rewrites both counter files from the store's current counters.
/// Graph and keyword files are read-only inputs and never rewritten.
pub fn persist_counters(paths: &DatasetConfig, store: &LinkStore) -> Result<()> {
    writer::write_impressions(&paths.impressions, store)?;
    writer::write_clicks(&paths.clicks, store)?;
    Ok(())
}
