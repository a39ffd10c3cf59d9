use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::OrgPath;

/// Organisation with no member overlap in the other snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisjointOrg {
    pub org: OrgPath,
    pub status: OrgLifecycle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrgLifecycle {
    /// Present only in the previous snapshot.
    Abolished,
    /// Present only in the current snapshot.
    Established,
}
