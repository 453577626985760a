// src/engine/retrieval.rs
//! Boolean keyword retrieval with ranked output.

use crate::engine::query::{self, ParsedQuery, QueryMode};
use crate::engine::scoring;
use crate::store::{Link, LinkStore};
use std::cmp::Ordering;

/// Evaluates a raw query against every link's keyword set.
///
/// Every matching link gets exactly one impression for this evaluation,
/// then scores are refreshed store-wide and the matched ids are returned
/// sorted ascending by score, least relevant first. Callers present the
/// order as-is. An empty query or an empty match set is a valid result,
/// not an error.
pub fn search(store: &mut LinkStore, raw: &str) -> Vec<String> {
    let parsed = query::parse(raw);
    let matched = collect_matches(store, &parsed);

    for id in &matched {
        store.increment_impressions(id);
    }
    scoring::rescore(store);

    sort_by_score(store, matched)
}

/// Ids of all links the parsed query matches, in store order.
fn collect_matches(store: &LinkStore, parsed: &ParsedQuery) -> Vec<String> {
    store
        .links()
        .filter(|(_, link)| is_match(parsed, link))
        .map(|(id, _)| id.clone())
        .collect()
}

fn is_match(parsed: &ParsedQuery, link: &Link) -> bool {
    match parsed {
        // Phrase mode compares verbatim, case-sensitively.
        ParsedQuery::Phrase(phrase) => link.has_keyword(phrase),
        // Term mode compares case-insensitively: keywords are lowercased
        // for the comparison only.
        ParsedQuery::Terms { terms, mode } => {
            let lowered: Vec<String> = link.keywords().iter().map(|k| k.to_lowercase()).collect();
            match mode {
                QueryMode::All => terms.iter().all(|t| lowered.iter().any(|k| k == t)),
                QueryMode::Any => terms.iter().any(|t| lowered.iter().any(|k| k == t)),
            }
        }
    }
}

/// Stable ascending sort by score; ties keep store order.
fn sort_by_score(store: &LinkStore, mut ids: Vec<String>) -> Vec<String> {
    ids.sort_by(|a, b| {
        let left = store.get(a).map_or(0.0, Link::score);
        let right = store.get(b).map_or(0.0, Link::score);
        left.partial_cmp(&right).unwrap_or(Ordering::Equal)
    });
    ids
}
