use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Final organisation path of a tracked group after the rename simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroupAssignment {
    pub group_id: String,
    pub final_org_path: String,
}
