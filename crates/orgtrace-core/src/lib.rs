//! # orgtrace-core
//!
//! Foundation crate for the orgtrace reconciliation engine.
//! Defines the shared models, traits, errors, config, constants and
//! tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{MatchingConfig, MembershipConfig, OrgTraceConfig, SimulationConfig};
pub use errors::{OrgTraceError, OrgTraceResult};
pub use models::{ComparisonRecord, OrgPath, OrgRecord, ReviewRow, SnapshotRow};
