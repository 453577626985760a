// src/dataset/reader.rs
//! Row-oriented readers for the four dataset files.
//!
//! Every file shares one shape: `id,value[,value...]` rows, one per line,
//! empty lines skipped. The graph and keyword files carry any number of
//! values per row; the counter files carry counts, last field winning
//! when a row repeats one.

use crate::error::{DatasetError, Result};
use crate::store::LinkStore;
use std::path::Path;

/// Graph rows: `src,dst1,dst2,...`. Repeated sources append edges in
/// file order; a row holding only an id registers an edgeless link.
pub fn load_graph(store: &mut LinkStore, path: &Path) -> Result<()> {
    for_each_row(path, |_, row| {
        let mut fields = row.split(',');
        if let Some(id) = fields.next() {
            store.entry(id);
            for target in fields {
                store.add_outbound(id, target);
            }
        }
        Ok(())
    })
}

/// Keyword rows: `id,kw1,kw2,...`. Case is preserved; the store drops
/// duplicates.
pub fn load_keywords(store: &mut LinkStore, path: &Path) -> Result<()> {
    for_each_row(path, |_, row| {
        let mut fields = row.split(',');
        if let Some(id) = fields.next() {
            store.entry(id);
            for keyword in fields {
                store.add_keyword(id, keyword);
            }
        }
        Ok(())
    })
}

pub fn load_impressions(store: &mut LinkStore, path: &Path) -> Result<()> {
    load_counts(path, |id, count| store.set_impressions(id, count))
}

pub fn load_clicks(store: &mut LinkStore, path: &Path) -> Result<()> {
    load_counts(path, |id, count| store.set_clicks(id, count))
}

/// Counter rows: `id,count`. Each field after the id must parse as an
/// unsigned count; when a row carries several, the last one wins.
fn load_counts<F>(path: &Path, mut apply: F) -> Result<()>
where
    F: FnMut(&str, u64),
{
    for_each_row(path, |line, row| {
        let mut fields = row.split(',');
        let id = fields.next().unwrap_or_default();
        let mut seen_count = false;
        for field in fields {
            let count = field.trim().parse::<u64>().map_err(|_| {
                DatasetError::MalformedRow {
                    path: path.to_path_buf(),
                    line,
                    reason: format!("expected a count, found {field:?}"),
                }
            })?;
            apply(id, count);
            seen_count = true;
        }
        if !seen_count {
            return Err(DatasetError::MalformedRow {
                path: path.to_path_buf(),
                line,
                reason: "expected `id,count`".to_string(),
            });
        }
        Ok(())
    })
}

/// Calls `handle(line_number, row)` for every non-empty line. Line
/// numbers are 1-based for error messages.
fn for_each_row<F>(path: &Path, mut handle: F) -> Result<()>
where
    F: FnMut(usize, &str) -> Result<()>,
{
    let content =
        std::fs::read_to_string(path).map_err(|source| DatasetError::io(source, path))?;
    for (index, line) in content.lines().enumerate() {
        let row = line.trim_end_matches('\r');
        if row.is_empty() {
            continue;
        }
        handle(index + 1, row)?;
    }
    Ok(())
}
