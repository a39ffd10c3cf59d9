use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::OrgPath;

/// Overlap metrics for one (prev org, curr org) pair with a non-empty intersection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairMetrics {
    pub prev_org: OrgPath,
    pub curr_org: OrgPath,
    pub prev_size: usize,
    pub curr_size: usize,
    pub common_members: usize,
    /// Intersection over the current org's size.
    pub common_ratio: f64,
    /// Intersection over union (Jaccard).
    pub similarity_index: f64,
    /// Previous rank minus current rank.
    pub rank_diff: i32,
    /// 1.0 minus the mean absolute difference of the employment-type ratios.
    pub composition_ratio_diff: f64,
}

/// Scorer output for a pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub rank_score: f64,
    pub similarity_score: f64,
    pub member_score: f64,
    pub total_score: f64,
    /// Label of the threshold rule selected for the previous-period size.
    pub applied_rule: String,
    pub same_org: bool,
}

/// One row of the comparison table.
///
/// Created by the scorer; only `same_org` and `confirmed` are mutated
/// afterwards, and only by the confirmation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonRecord {
    pub prev_org: OrgPath,
    pub curr_org: OrgPath,
    pub prev_size: usize,
    pub curr_size: usize,
    pub common_members: usize,
    pub common_ratio: f64,
    pub similarity_index: f64,
    pub rank_diff: i32,
    pub composition_ratio_diff: f64,
    pub rank_score: f64,
    pub similarity_score: f64,
    pub member_score: f64,
    pub total_score: f64,
    pub applied_rule: String,
    pub same_org: bool,
    pub confirmed: bool,
}

impl ComparisonRecord {
    pub fn from_parts(metrics: PairMetrics, score: ScoreBreakdown) -> Self {
        Self {
            prev_org: metrics.prev_org,
            curr_org: metrics.curr_org,
            prev_size: metrics.prev_size,
            curr_size: metrics.curr_size,
            common_members: metrics.common_members,
            common_ratio: metrics.common_ratio,
            similarity_index: metrics.similarity_index,
            rank_diff: metrics.rank_diff,
            composition_ratio_diff: metrics.composition_ratio_diff,
            rank_score: score.rank_score,
            similarity_score: score.similarity_score,
            member_score: score.member_score,
            total_score: score.total_score,
            applied_rule: score.applied_rule,
            same_org: score.same_org,
            confirmed: false,
        }
    }

    /// True when the record shares its prev org or its curr org with `other`.
    pub fn shares_org_with(&self, other: &ComparisonRecord) -> bool {
        self.prev_org == other.prev_org || self.curr_org == other.curr_org
    }

    pub fn is_pair(&self, prev_org: &str, curr_org: &str) -> bool {
        self.prev_org.as_str() == prev_org && self.curr_org.as_str() == curr_org
    }
}
