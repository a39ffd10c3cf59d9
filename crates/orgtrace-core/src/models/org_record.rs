use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{OrgPath, SnapshotRow};

/// One organisation of a snapshot, the input unit of the rename simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrgRecord {
    pub org_path: OrgPath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl OrgRecord {
    pub fn new(org_path: impl Into<OrgPath>) -> Self {
        Self {
            org_path: org_path.into(),
            group_id: None,
            rank: None,
        }
    }

    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn effective_rank(&self) -> u32 {
        self.rank.unwrap_or_else(|| self.org_path.rank())
    }

    /// Collapse per-user snapshot rows into one record per organisation.
    ///
    /// Ancestors that only appear as path prefixes are added without a group
    /// id so the tree has somewhere to attach their children. Order is
    /// first-seen, ancestors before descendants. The first non-empty
    /// `group_id` seen for a path wins.
    pub fn from_snapshot(rows: &[SnapshotRow]) -> Vec<OrgRecord> {
        let mut records: Vec<OrgRecord> = Vec::new();
        let mut index: HashMap<OrgPath, usize> = HashMap::new();

        for row in rows {
            for prefix in row.org_path.prefixes() {
                let is_leaf = prefix == row.org_path;
                let idx = *index.entry(prefix.clone()).or_insert_with(|| {
                    records.push(OrgRecord::new(prefix));
                    records.len() - 1
                });
                if !is_leaf {
                    continue;
                }
                let record = &mut records[idx];
                if record.group_id.is_none() {
                    record.group_id = row.group_id.clone().filter(|g| !g.is_empty());
                }
                if record.rank.is_none() {
                    record.rank = row.rank;
                }
            }
        }

        records
    }
}
