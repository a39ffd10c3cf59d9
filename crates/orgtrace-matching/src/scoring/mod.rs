//! Similarity scorer: weighted same-organisation verdict for a candidate pair.

mod rank;
mod thresholds;

use orgtrace_core::config::{MatchingConfig, ThresholdRule, WeightConfig};
use orgtrace_core::errors::MatchingError;
use orgtrace_core::models::{PairMetrics, ScoreBreakdown};
use orgtrace_core::traits::IPairScorer;

pub use rank::rank_score;
pub use thresholds::ThresholdTable;

/// Default scorer: a rank score plus two binary gates (Jaccard similarity and
/// common ratio), each gate worth its full weight on pass.
///
/// `same_org` requires the total to reach the sum of all weights, so every
/// signal has to pass at once.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    weights: WeightConfig,
    thresholds: ThresholdTable,
    small_org_size: usize,
}

impl SimilarityScorer {
    pub fn new(config: &MatchingConfig) -> Result<Self, MatchingError> {
        Ok(Self {
            weights: config.weights.clone(),
            thresholds: ThresholdTable::new(config.thresholds.clone())?,
            small_org_size: config.small_org_size,
        })
    }

    pub fn get_thresholds(&self, size: usize) -> &ThresholdRule {
        self.thresholds.get(size)
    }

    pub fn rank_score(&self, rank_diff: i32) -> f64 {
        rank_score(rank_diff, self.weights.rank_weight)
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.total_weight()
    }

    pub fn score_pair(&self, pair: &PairMetrics) -> ScoreBreakdown {
        let prev_rule = self.get_thresholds(pair.prev_size);
        let curr_rule = self.get_thresholds(pair.curr_size);

        // Both gates use the lower threshold of the two size buckets.
        let similarity_threshold = prev_rule
            .similarity_threshold
            .min(curr_rule.similarity_threshold);
        let member_ratio_threshold = prev_rule
            .member_ratio_threshold
            .min(curr_rule.member_ratio_threshold);

        let rank_score = self.rank_score(pair.rank_diff);
        let similarity_score = if pair.similarity_index >= similarity_threshold {
            self.weights.similarity_weight
        } else {
            0.0
        };
        let member_score = if pair.common_ratio >= member_ratio_threshold {
            self.weights.member_weight
        } else {
            0.0
        };
        let total_score = rank_score + similarity_score + member_score;

        let small_and_unrenamed = pair.prev_size < self.small_org_size
            && pair.curr_size > 0
            && pair.prev_org == pair.curr_org;
        let same_org = total_score >= self.total_weight() || small_and_unrenamed;

        ScoreBreakdown {
            rank_score,
            similarity_score,
            member_score,
            total_score,
            applied_rule: prev_rule.comment.clone(),
            same_org,
        }
    }
}

impl IPairScorer for SimilarityScorer {
    fn score(&self, pair: &PairMetrics) -> ScoreBreakdown {
        self.score_pair(pair)
    }

    fn name(&self) -> &str {
        "similarity"
    }
}
