// src/engine/mod.rs
//! The ranking and retrieval engine.
//!
//! Owns no I/O: the dataset module loads the store, the shell and CLI
//! handlers trigger persistence. Everything here runs synchronously on
//! the calling thread.

pub mod propagation;
pub mod query;
pub mod retrieval;
pub mod scoring;

use crate::store::LinkStore;

/// Facade over the store exposing the three caller-facing operations.
#[derive(Debug, Default)]
pub struct SearchEngine {
    store: LinkStore,
}

impl SearchEngine {
    #[must_use]
    pub fn new(store: LinkStore) -> Self {
        Self { store }
    }

    /// Recomputes normalized ranks from the current graph, then refreshes
    /// scores so the new ranks are visible to the next sort.
    pub fn run_propagation(&mut self) {
        propagation::propagate(&mut self.store);
        scoring::rescore(&mut self.store);
    }

    /// Evaluates a raw query. Matching links each gain one impression;
    /// returns matched ids sorted ascending by score.
    pub fn query(&mut self, raw: &str) -> Vec<String> {
        retrieval::search(&mut self.store, raw)
    }

    /// Records a user click on a result and refreshes scores. An unknown
    /// id creates a zero-valued link, per the store's mutator contract.
    pub fn record_click(&mut self, id: &str) {
        self.store.increment_clicks(id);
        scoring::rescore(&mut self.store);
    }

    #[must_use]
    pub fn store(&self) -> &LinkStore {
        &self.store
    }
}
