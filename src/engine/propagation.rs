// src/engine/propagation.rs
//! Iterative rank propagation over the link graph.

use crate::store::LinkStore;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

/// Hard cap on propagation passes; hitting it is an accuracy tradeoff,
/// never an error.
pub const MAX_ITERATIONS: usize = 100_000;

/// Per-link convergence threshold between consecutive passes.
pub const EPSILON: f64 = 1e-5;

/// Runs propagation to a fixed point and writes normalized ranks in place.
///
/// Each pass sweeps every link exactly once, in store order, via
/// depth-first traversal; every out-edge of a swept link contributes
/// `prev_rank / outdegree` to its target. There is no damping factor and
/// no dangling-mass redistribution: a zero-outdegree link distributes
/// nothing, and an edge whose target is missing from the store drops its
/// mass. The pass loop stops once no link's working rank moved by more
/// than [`EPSILON`], or at [`MAX_ITERATIONS`].
///
/// The final rank is a min-max index normalization: links sorted by
/// working rank (ties broken on identifier) are assigned
/// `index / (N - 1)`, so the lowest-ranked link gets 0.0 and the highest
/// 1.0. A single-link store gets rank 0.0; an empty store is a no-op.
pub fn propagate(store: &mut LinkStore) {
    let n = store.len();
    if n == 0 {
        return;
    }

    #[allow(clippy::cast_precision_loss)]
    let initial = 1.0 / n as f64;
    let mut ranks: BTreeMap<String, f64> = store.ids().map(|id| (id.clone(), initial)).collect();

    for _ in 0..MAX_ITERATIONS {
        let prev = ranks.clone();
        for mass in ranks.values_mut() {
            *mass = 0.0;
        }

        sweep(store, &prev, &mut ranks);

        if converged(&prev, &ranks) {
            break;
        }
    }

    normalize(store, &ranks);
}

/// One full pass: depth-first traversal from every not-yet-visited link,
/// in store order.
fn sweep(store: &LinkStore, prev: &BTreeMap<String, f64>, next: &mut BTreeMap<String, f64>) {
    let mut visited: HashSet<&str> = HashSet::new();

    for id in store.ids() {
        if !visited.contains(id.as_str()) {
            traverse(store, id, prev, next, &mut visited);
        }
    }
}

/// A suspended traversal position: a link and the index of its next
/// out-edge.
struct Frame<'a> {
    id: &'a str,
    outbound: &'a [String],
    cursor: usize,
}

impl<'a> Frame<'a> {
    fn new(id: &'a str, outbound: &'a [String]) -> Self {
        Self {
            id,
            outbound,
            cursor: 0,
        }
    }

    fn advance(&mut self) -> Option<&'a str> {
        let target = self.outbound.get(self.cursor)?;
        self.cursor += 1;
        Some(target)
    }
}

/// Depth-first traversal from `start`, as an explicit frame stack so deep
/// graphs cannot overflow the call stack. Contribution order matches a
/// recursive descent: an edge contributes the moment it is walked, and an
/// unvisited target is fully explored before its source's remaining edges.
#[allow(clippy::cast_precision_loss)]
fn traverse<'a>(
    store: &'a LinkStore,
    start: &'a str,
    prev: &BTreeMap<String, f64>,
    next: &mut BTreeMap<String, f64>,
    visited: &mut HashSet<&'a str>,
) {
    let Some(origin) = store.get(start) else {
        return;
    };

    visited.insert(start);
    let mut stack = vec![Frame::new(start, origin.outbound())];

    while let Some(frame) = stack.last_mut() {
        let Some(target) = frame.advance() else {
            stack.pop();
            continue;
        };

        let outdegree = frame.outbound.len() as f64;
        let share = prev.get(frame.id).copied().unwrap_or(0.0) / outdegree;

        // The contribution fires on every walked edge, even into an
        // already-visited link; a target missing from the store absorbs
        // nothing.
        if let Some(mass) = next.get_mut(target) {
            *mass += share;
        }

        if !visited.contains(target) {
            if let Some(link) = store.get(target) {
                visited.insert(target);
                stack.push(Frame::new(target, link.outbound()));
            }
        }
    }
}

fn converged(prev: &BTreeMap<String, f64>, next: &BTreeMap<String, f64>) -> bool {
    prev.values()
        .zip(next.values())
        .all(|(before, after)| (after - before).abs() <= EPSILON)
}

/// Min-max index normalization of the working ranks into `link.rank`.
#[allow(clippy::cast_precision_loss)]
fn normalize(store: &mut LinkStore, ranks: &BTreeMap<String, f64>) {
    let n = store.len();

    if n == 1 {
        if let Some((_, link)) = store.links_mut().next() {
            link.rank = 0.0;
        }
        return;
    }

    let mut order: Vec<(&str, f64)> = ranks.iter().map(|(id, r)| (id.as_str(), *r)).collect();
    order.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let span = (n - 1) as f64;
    for (index, (id, _)) in order.iter().enumerate() {
        if let Some(link) = store.get_mut(id) {
            link.rank = index as f64 / span;
        }
    }
}
