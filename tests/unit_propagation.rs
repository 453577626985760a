// tests/unit_propagation.rs
//! Propagation scenarios: convergence, normalization, determinism.

use linkrank_core::engine::propagation;
use linkrank_core::store::LinkStore;

fn rank_of(store: &LinkStore, id: &str) -> f64 {
    store.get(id).expect("link should exist").rank()
}

#[test]
fn test_three_cycle_normalizes_to_full_spread() {
    let mut store = LinkStore::new();
    store.add_outbound("a", "b");
    store.add_outbound("b", "c");
    store.add_outbound("c", "a");
    propagation::propagate(&mut store);

    // Every link passes its whole mass around the cycle, so working
    // ranks stay equal and the tie breaks on identifier order.
    assert_eq!(rank_of(&store, "a"), 0.0);
    assert_eq!(rank_of(&store, "b"), 0.5);
    assert_eq!(rank_of(&store, "c"), 1.0);
}

#[test]
fn test_ranks_are_bounded_and_span_zero_to_one() {
    // Two disjoint two-cycles: a fixed point is reached in one pass.
    let mut store = LinkStore::new();
    store.add_outbound("a", "b");
    store.add_outbound("b", "a");
    store.add_outbound("c", "d");
    store.add_outbound("d", "c");
    propagation::propagate(&mut store);

    for (_, link) in store.links() {
        assert!(link.rank() >= 0.0 && link.rank() <= 1.0);
    }
    assert!(store.links().any(|(_, l)| l.rank() == 0.0));
    assert!(store.links().any(|(_, l)| l.rank() == 1.0));
}

#[test]
fn test_repeat_run_on_unchanged_graph_is_idempotent() {
    let mut store = LinkStore::new();
    store.add_outbound("a", "b");
    store.add_outbound("b", "c");
    store.add_keyword("c", "kw");
    propagation::propagate(&mut store);
    let first: Vec<f64> = store.links().map(|(_, l)| l.rank()).collect();

    propagation::propagate(&mut store);
    let second: Vec<f64> = store.links().map(|(_, l)| l.rank()).collect();

    assert_eq!(first, second);
}

#[test]
fn test_isolated_links_rank_by_identifier() {
    // No edges at all: every working rank drains to zero, and the
    // normalization falls back to identifier order.
    let mut store = LinkStore::new();
    store.add_keyword("c", "x");
    store.add_keyword("a", "x");
    store.add_keyword("b", "x");
    propagation::propagate(&mut store);

    assert_eq!(rank_of(&store, "a"), 0.0);
    assert_eq!(rank_of(&store, "b"), 0.5);
    assert_eq!(rank_of(&store, "c"), 1.0);
}

#[test]
fn test_sink_drains_mass_to_zero_fixed_point() {
    // Spokes feed a hub that distributes nothing, so all mass drains
    // out of the system and every working rank converges to zero.
    let mut store = LinkStore::new();
    store.add_outbound("s1", "hub");
    store.add_outbound("s2", "hub");
    store.add_outbound("s3", "hub");
    store.add_keyword("hub", "kw");
    propagation::propagate(&mut store);

    assert_eq!(rank_of(&store, "hub"), 0.0);
    assert_eq!(rank_of(&store, "s1"), 1.0 / 3.0);
    assert_eq!(rank_of(&store, "s2"), 2.0 / 3.0);
    assert_eq!(rank_of(&store, "s3"), 1.0);
}

#[test]
fn test_circulating_mass_hits_the_iteration_cap_and_still_normalizes() {
    // A source feeding a cycle keeps a quarter of the mass rotating
    // forever; the pass loop must stop at the cap and normalization
    // must still produce the full 0..=1 spread.
    let mut store = LinkStore::new();
    store.add_outbound("d", "a");
    store.add_outbound("a", "b");
    store.add_outbound("b", "c");
    store.add_outbound("c", "a");
    propagation::propagate(&mut store);

    let mut ranks: Vec<f64> = store.links().map(|(_, l)| l.rank()).collect();
    ranks.sort_by(|x, y| x.partial_cmp(y).expect("ranks are never NaN"));
    assert!((ranks[0] - 0.0).abs() < 1e-12);
    assert!((ranks[1] - 1.0 / 3.0).abs() < 1e-12);
    assert!((ranks[2] - 2.0 / 3.0).abs() < 1e-12);
    assert!((ranks[3] - 1.0).abs() < 1e-12);
}
