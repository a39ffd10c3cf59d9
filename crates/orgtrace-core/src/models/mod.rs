//! Data models shared across the workspace.

mod comparison;
mod disjoint;
mod group_assignment;
mod org_path;
mod org_record;
mod review;
mod snapshot;

pub use comparison::{ComparisonRecord, PairMetrics, ScoreBreakdown};
pub use disjoint::{DisjointOrg, OrgLifecycle};
pub use group_assignment::GroupAssignment;
pub use org_path::OrgPath;
pub use org_record::OrgRecord;
pub use review::{ReviewMarker, ReviewRow};
pub use snapshot::{EmploymentType, SnapshotRow};
