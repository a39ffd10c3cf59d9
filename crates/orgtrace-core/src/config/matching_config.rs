use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::SMALL_ORG_SIZE;

/// Weights of the three same-organisation signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    pub rank_weight: f64,
    pub similarity_weight: f64,
    pub member_weight: f64,
}

impl WeightConfig {
    /// Pass bar for `same_org`: the sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.rank_weight + self.similarity_weight + self.member_weight
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            rank_weight: defaults::DEFAULT_RANK_WEIGHT,
            similarity_weight: defaults::DEFAULT_SIMILARITY_WEIGHT,
            member_weight: defaults::DEFAULT_MEMBER_WEIGHT,
        }
    }
}

/// Gate values applied to organisations up to `size` members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    /// Inclusive upper bound on organisation size.
    pub size: usize,
    pub similarity_threshold: f64,
    pub member_ratio_threshold: f64,
    /// Human-readable label, copied onto each scored record.
    #[serde(default)]
    pub comment: String,
}

impl ThresholdRule {
    pub fn new(
        size: usize,
        similarity_threshold: f64,
        member_ratio_threshold: f64,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            size,
            similarity_threshold,
            member_ratio_threshold,
            comment: comment.into(),
        }
    }
}

/// How confirmation spreads across records sharing an organisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationMode {
    /// One flood-fill pass over the table as it stood before the pass.
    #[default]
    SinglePass,
    /// Repeat the pass until no record changes.
    Fixpoint,
}

/// Matching subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub propagation: PropagationMode,
    /// Score candidate pairs on the rayon pool.
    pub parallel: bool,
    /// Prev-side size below which an unchanged name forces `same_org`.
    pub small_org_size: usize,
    pub weights: WeightConfig,
    /// Size-bucketed gates; sorted by `size` when the scorer is built.
    pub thresholds: Vec<ThresholdRule>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            propagation: PropagationMode::default(),
            parallel: defaults::DEFAULT_PARALLEL,
            small_org_size: SMALL_ORG_SIZE,
            weights: WeightConfig::default(),
            thresholds: defaults::default_thresholds(),
        }
    }
}
