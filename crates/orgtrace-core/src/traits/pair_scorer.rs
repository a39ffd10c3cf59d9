use crate::models::{PairMetrics, ScoreBreakdown};

/// Scores a candidate (prev org, curr org) pair.
///
/// Implementations must be pure: candidate generation calls `score` from
/// rayon workers with no ordering guarantee.
pub trait IPairScorer: Send + Sync {
    fn score(&self, pair: &PairMetrics) -> ScoreBreakdown;

    /// Scorer name, for logs.
    fn name(&self) -> &str;
}
