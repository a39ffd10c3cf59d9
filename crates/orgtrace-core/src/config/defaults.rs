//! Compiled defaults for every config section.

use super::matching_config::ThresholdRule;

pub const DEFAULT_RANK_WEIGHT: f64 = 2.0;
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 1.0;
pub const DEFAULT_MEMBER_WEIGHT: f64 = 1.0;
pub const DEFAULT_PARALLEL: bool = true;

/// Size-bucketed threshold table, ascending by bound. The last entry is the
/// catch-all for larger organisations.
pub fn default_thresholds() -> Vec<ThresholdRule> {
    vec![
        ThresholdRule::new(5, 0.8, 0.8, "small"),
        ThresholdRule::new(20, 0.7, 0.7, "medium"),
        ThresholdRule::new(100, 0.6, 0.6, "large"),
        ThresholdRule::new(100_000, 0.5, 0.5, "very large"),
    ]
}

pub fn default_attribute_columns() -> Vec<String> {
    vec![crate::constants::EMPLOYEE_TYPE_ATTRIBUTE.to_string()]
}
