// src/store/link.rs
//! Per-link record: outbound edges, keywords, counters, derived metrics.

/// A single link's stored state.
///
/// `outbound`, `keywords`, `impressions` and `clicks` come from the
/// dataset (or from mutators at runtime); `rank`, `ctr` and `score` are
/// derived in place by the engine passes and never persisted.
#[derive(Debug, Clone, Default)]
pub struct Link {
    pub(crate) outbound: Vec<String>,
    pub(crate) keywords: Vec<String>,
    pub(crate) impressions: u64,
    pub(crate) clicks: u64,
    pub(crate) rank: f64,
    pub(crate) ctr: f64,
    pub(crate) score: f64,
}

impl Link {
    /// Outbound edge targets, in insertion order. Duplicates are kept:
    /// a repeated edge distributes rank mass twice.
    #[must_use]
    pub fn outbound(&self) -> &[String] {
        &self.outbound
    }

    /// Number of outbound edges (counting duplicates).
    #[must_use]
    pub fn outdegree(&self) -> usize {
        self.outbound.len()
    }

    /// Keywords in insertion order, case preserved, no duplicates.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Exact, case-sensitive keyword-set membership.
    #[must_use]
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    #[must_use]
    pub fn impressions(&self) -> u64 {
        self.impressions
    }

    #[must_use]
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Normalized graph importance in `[0, 1]`.
    #[must_use]
    pub fn rank(&self) -> f64 {
        self.rank
    }

    /// `1 / impressions` (0.0 for a zero-impression link).
    #[must_use]
    pub fn ctr(&self) -> f64 {
        self.ctr
    }

    /// Blended relevance used to order search results.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }
}
