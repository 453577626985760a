// tests/integration_engine.rs
//! End-to-end session: load a dataset from disk, propagate, search,
//! click, persist, reload.

use anyhow::Result;
use linkrank_core::config::DatasetConfig;
use linkrank_core::dataset;
use linkrank_core::engine::SearchEngine;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Three links in a cycle, with overlapping keywords and pre-existing
/// counters.
fn seed(root: &Path) -> Result<DatasetConfig> {
    let paths = DatasetConfig {
        graph: root.join("web_graph.csv"),
        keywords: root.join("keyword.csv"),
        impressions: root.join("num_impressions.csv"),
        clicks: root.join("clicks.csv"),
    };
    fs::write(
        &paths.graph,
        "alpha.com,beta.com\nbeta.com,gamma.com\ngamma.com,alpha.com\n",
    )?;
    fs::write(
        &paths.keywords,
        "alpha.com,news,tech\nbeta.com,news\ngamma.com,sports\n",
    )?;
    fs::write(&paths.impressions, "alpha.com,4\nbeta.com,2\ngamma.com,1\n")?;
    fs::write(&paths.clicks, "alpha.com,1\nbeta.com,1\ngamma.com,0\n")?;
    Ok(paths)
}

#[test]
fn test_full_session_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let paths = seed(dir.path())?;

    let store = dataset::load(&paths)?;
    let mut engine = SearchEngine::new(store);
    engine.run_propagation();

    // The cycle keeps working ranks equal; identifiers break the tie.
    assert_eq!(engine.store().get("alpha.com").expect("alpha").rank(), 0.0);
    assert_eq!(engine.store().get("beta.com").expect("beta").rank(), 0.5);
    assert_eq!(engine.store().get("gamma.com").expect("gamma").rank(), 1.0);

    // "news" matches alpha and beta; ascending score puts the
    // zero-ranked alpha first.
    let results = engine.query("news");
    assert_eq!(results, vec!["alpha.com", "beta.com"]);
    assert_eq!(
        engine.store().get("alpha.com").expect("alpha").impressions(),
        5
    );
    assert_eq!(
        engine.store().get("beta.com").expect("beta").impressions(),
        3
    );
    assert_eq!(
        engine.store().get("gamma.com").expect("gamma").impressions(),
        1
    );

    engine.record_click("alpha.com");
    assert_eq!(engine.store().get("alpha.com").expect("alpha").clicks(), 2);
    // CTR derives from impressions alone; a click does not move it.
    assert!((engine.store().get("alpha.com").expect("alpha").ctr() - 0.2).abs() < 1e-12);

    dataset::persist_counters(&paths, engine.store())?;
    assert_eq!(
        fs::read_to_string(&paths.impressions)?,
        "alpha.com,5\nbeta.com,3\ngamma.com,1\n"
    );
    assert_eq!(
        fs::read_to_string(&paths.clicks)?,
        "alpha.com,2\nbeta.com,1\ngamma.com,0\n"
    );

    // A fresh load sees the persisted counters.
    let reloaded = dataset::load(&paths)?;
    assert_eq!(reloaded.get("alpha.com").expect("alpha").impressions(), 5);
    assert_eq!(reloaded.get("alpha.com").expect("alpha").clicks(), 2);
    Ok(())
}

#[test]
fn test_unmatched_query_changes_nothing_on_disk() -> Result<()> {
    let dir = TempDir::new()?;
    let paths = seed(dir.path())?;

    let mut engine = SearchEngine::new(dataset::load(&paths)?);
    engine.run_propagation();

    assert!(engine.query("bicycles").is_empty());
    dataset::persist_counters(&paths, engine.store())?;
    assert_eq!(
        fs::read_to_string(&paths.impressions)?,
        "alpha.com,4\nbeta.com,2\ngamma.com,1\n"
    );
    Ok(())
}

#[test]
fn test_click_on_unknown_id_creates_a_persisted_entry() -> Result<()> {
    let dir = TempDir::new()?;
    let paths = seed(dir.path())?;

    let mut engine = SearchEngine::new(dataset::load(&paths)?);
    engine.run_propagation();
    engine.record_click("ghost.com");

    dataset::persist_counters(&paths, engine.store())?;
    let clicks = fs::read_to_string(&paths.clicks)?;
    assert!(clicks.contains("ghost.com,1\n"), "got: {clicks}");
    let impressions = fs::read_to_string(&paths.impressions)?;
    assert!(impressions.contains("ghost.com,0\n"), "got: {impressions}");
    Ok(())
}
