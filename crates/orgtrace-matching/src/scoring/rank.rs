//! Rank-change score.

/// Score for a signed rank difference (previous rank minus current rank).
///
/// An unchanged rank earns the full `rank_weight`. A positive difference
/// costs 0.5 per level, a negative one a full point per level; both are
/// floored at zero.
pub fn rank_score(rank_diff: i32, rank_weight: f64) -> f64 {
    match rank_diff {
        0 => rank_weight,
        d if d > 0 => (rank_weight - 0.5 * f64::from(d)).max(0.0),
        d => (rank_weight - f64::from(d.unsigned_abs())).max(0.0),
    }
}
