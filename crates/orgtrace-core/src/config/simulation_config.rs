use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PLACEHOLDER_SUFFIX;

/// Rename simulator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Appended to the target name to form the two-phase placeholder.
    pub placeholder_suffix: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            placeholder_suffix: DEFAULT_PLACEHOLDER_SUFFIX.to_string(),
        }
    }
}
