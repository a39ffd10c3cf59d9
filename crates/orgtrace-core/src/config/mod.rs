//! Configuration system for orgtrace.
//! TOML-based; every section falls back to compiled defaults.

pub mod defaults;
pub mod matching_config;
pub mod membership_config;
pub mod orgtrace_config;
pub mod simulation_config;

pub use matching_config::{MatchingConfig, PropagationMode, ThresholdRule, WeightConfig};
pub use membership_config::MembershipConfig;
pub use orgtrace_config::OrgTraceConfig;
pub use simulation_config::SimulationConfig;
