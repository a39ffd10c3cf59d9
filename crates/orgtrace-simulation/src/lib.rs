//! # orgtrace-simulation
//!
//! Hierarchy rename simulator. Builds one organisation tree from both
//! snapshots, applies every confirmed match as a rename of the
//! previous-period node, and reports the final path of each tracked group.

pub mod rename;
pub mod simulator;
pub mod tree;

pub use rename::{rename_node, RenameOutcome};
pub use simulator::{
    group_assignments, AppliedRename, RenameSimulator, SimulationReport, SkipReason, SkippedRename,
};
pub use tree::{NodeId, OrgNode, OrgTree, Period};
