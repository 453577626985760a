// src/dataset/writer.rs
//! Counter persistence: full-file rewrites of the impressions and clicks
//! files, in store order, atomic via a sibling temp file.

use crate::error::{DatasetError, Result};
use crate::store::LinkStore;
use std::path::Path;

pub fn write_impressions(path: &Path, store: &LinkStore) -> Result<()> {
    let rows = render_rows(store.links().map(|(id, link)| (id.as_str(), link.impressions())));
    atomic_write(path, &rows)
}

pub fn write_clicks(path: &Path, store: &LinkStore) -> Result<()> {
    let rows = render_rows(store.links().map(|(id, link)| (id.as_str(), link.clicks())));
    atomic_write(path, &rows)
}

fn render_rows<'a>(counters: impl Iterator<Item = (&'a str, u64)>) -> String {
    let mut out = String::new();
    for (id, count) in counters {
        out.push_str(&format!("{id},{count}\n"));
    }
    out
}

/// Write to a sibling temp file, then rename over the target, so an
/// interrupted write never leaves a truncated dataset behind.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let tmp = path.with_extension("csv.tmp");
    std::fs::write(&tmp, content).map_err(|source| DatasetError::io(source, &tmp))?;
    std::fs::rename(&tmp, path).map_err(|source| DatasetError::io(source, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_one_id_count_pair_per_line() {
        let rows = render_rows([("a", 3), ("b", 0)].into_iter());
        assert_eq!(rows, "a,3\nb,0\n");
    }

    #[test]
    fn no_counters_renders_empty() {
        assert_eq!(render_rows(std::iter::empty()), "");
    }
}
