use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_ROOT_SENTINEL;

/// Membership set builder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipConfig {
    /// Top-level path meaning "no organisation". Rows under it are skipped.
    pub root_sentinel: String,
    /// Columns whose values are collected per organisation.
    pub attribute_columns: Vec<String>,
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            root_sentinel: DEFAULT_ROOT_SENTINEL.to_string(),
            attribute_columns: defaults::default_attribute_columns(),
        }
    }
}
