// src/engine/scoring.rs
//! CTR and relevance-score derivation.

use crate::store::LinkStore;

/// Fraction of the score always anchored to raw graph rank.
pub const RANK_WEIGHT: f64 = 0.4;

/// Fraction governed by the impression-weighted rank/CTR blend.
pub const BLEND_WEIGHT: f64 = 0.6;

/// Slope of the impression ramp `w = g·n / (1 + g·n)`.
pub const IMPRESSION_GAIN: f64 = 0.1;

/// Recomputes `ctr` and `score` for every link in place.
///
/// Cheap enough to run after any change to rank, impressions or clicks;
/// must run before any sort by score.
pub fn rescore(store: &mut LinkStore) {
    for (_, link) in store.links_mut() {
        link.ctr = click_through_rate(link.impressions);
        link.score = blend(link.rank, link.ctr, link.impressions);
    }
}

/// `1 / impressions`, guarded to 0.0 for a zero-impression link so that
/// downstream sorting never sees NaN or infinity.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn click_through_rate(impressions: u64) -> f64 {
    if impressions == 0 {
        0.0
    } else {
        1.0 / impressions as f64
    }
}

/// Impression-weighted blend of rank and CTR.
///
/// Rank dominates while impressions are few (little trust in the observed
/// CTR); as impressions accumulate, CTR gains weight inside the blended
/// 60%, while 40% of the score stays anchored to graph rank.
#[must_use]
pub fn blend(rank: f64, ctr: f64, impressions: u64) -> f64 {
    let w = impression_weight(impressions);
    RANK_WEIGHT * rank + BLEND_WEIGHT * ((1.0 - w) * rank + w * ctr)
}

/// Trust ramp in `[0, 1)`: 0 at zero impressions, approaching 1 as they
/// grow.
#[allow(clippy::cast_precision_loss)]
fn impression_weight(impressions: u64) -> f64 {
    let ramp = IMPRESSION_GAIN * impressions as f64;
    ramp / (1.0 + ramp)
}
