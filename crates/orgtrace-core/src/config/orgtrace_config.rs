//! Top-level orgtrace configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{MatchingConfig, MembershipConfig, SimulationConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution: `orgtrace.toml` in the given directory, falling back to
/// compiled defaults for anything it leaves out. Environment variables are
/// the boundary layer's business and are not read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OrgTraceConfig {
    pub membership: MembershipConfig,
    pub matching: MatchingConfig,
    pub simulation: SimulationConfig,
}

impl OrgTraceConfig {
    /// Load `orgtrace.toml` from `dir`. A missing file yields the defaults.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        Self::load_file(&path)
    }

    /// Load and validate an explicit config file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: OrgTraceConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: OrgTraceConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = &self.matching.weights;
        for (field, value) in [
            ("matching.weights.rank_weight", weights.rank_weight),
            ("matching.weights.similarity_weight", weights.similarity_weight),
            ("matching.weights.member_weight", weights.member_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite, non-negative number"));
            }
        }
        if weights.total_weight() <= 0.0 {
            return Err(invalid("matching.weights", "weights must not all be zero"));
        }

        if self.matching.thresholds.is_empty() {
            return Err(invalid(
                "matching.thresholds",
                "at least one threshold rule is required",
            ));
        }
        for (i, rule) in self.matching.thresholds.iter().enumerate() {
            if !(0.0..=1.0).contains(&rule.similarity_threshold) {
                return Err(invalid(
                    &format!("matching.thresholds[{i}].similarity_threshold"),
                    "must be between 0.0 and 1.0",
                ));
            }
            if !(0.0..=1.0).contains(&rule.member_ratio_threshold) {
                return Err(invalid(
                    &format!("matching.thresholds[{i}].member_ratio_threshold"),
                    "must be between 0.0 and 1.0",
                ));
            }
        }

        if self.membership.root_sentinel.is_empty() {
            return Err(invalid("membership.root_sentinel", "must not be empty"));
        }
        if self.simulation.placeholder_suffix.is_empty() {
            return Err(invalid("simulation.placeholder_suffix", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
