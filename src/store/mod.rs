// src/store/mod.rs
//! The link store: every known link, keyed by identifier.

mod link;

pub use link::Link;

use std::collections::BTreeMap;

/// Owning container for all links.
///
/// Iteration order is identifier order, which keeps propagation sweeps,
/// rank tie-breaks and persisted files deterministic. Mutators create a
/// zero-valued entry for an unknown id, matching load-time behavior where
/// a metadata file may name a link before the graph file does.
#[derive(Debug, Clone, Default)]
pub struct LinkStore {
    links: BTreeMap<String, Link>,
}

impl LinkStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.links.contains_key(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Link> {
        self.links.get(id)
    }

    /// All links in store (identifier) order.
    pub fn links(&self) -> impl Iterator<Item = (&String, &Link)> {
        self.links.iter()
    }

    /// All identifiers in store order.
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.links.keys()
    }

    /// Replaces the link's outbound edge list.
    pub fn set_outbound(&mut self, id: &str, targets: Vec<String>) {
        self.entry(id).outbound = targets;
    }

    /// Appends one outbound edge (the loader adds edges row by row).
    pub fn add_outbound(&mut self, id: &str, target: &str) {
        self.entry(id).outbound.push(target.to_string());
    }

    /// Adds a keyword, preserving case; duplicates are ignored.
    pub fn add_keyword(&mut self, id: &str, keyword: &str) {
        let link = self.entry(id);
        if !link.keywords.iter().any(|k| k == keyword) {
            link.keywords.push(keyword.to_string());
        }
    }

    pub fn set_impressions(&mut self, id: &str, count: u64) {
        self.entry(id).impressions = count;
    }

    pub fn set_clicks(&mut self, id: &str, count: u64) {
        self.entry(id).clicks = count;
    }

    pub fn increment_impressions(&mut self, id: &str) {
        self.entry(id).impressions += 1;
    }

    pub fn increment_clicks(&mut self, id: &str) {
        self.entry(id).clicks += 1;
    }

    pub(crate) fn entry(&mut self, id: &str) -> &mut Link {
        self.links.entry(id.to_string()).or_default()
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Link> {
        self.links.get_mut(id)
    }

    /// Mutable sweep in store order, for the engine's derivation passes.
    pub(crate) fn links_mut(&mut self) -> impl Iterator<Item = (&String, &mut Link)> {
        self.links.iter_mut()
    }
}
