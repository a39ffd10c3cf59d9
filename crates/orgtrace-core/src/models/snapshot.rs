use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::OrgPath;
use crate::constants::{EMPLOYEE_TYPE_ATTRIBUTE, GROUP_ID_ATTRIBUTE};

/// Employment type of a user row, used for the composition ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    #[serde(alias = "contract_employee")]
    Contract,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Contract => "contract",
        }
    }

    /// Parse a column value. Accepts the legacy `contract_employee` spelling.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full_time" => Some(Self::FullTime),
            "part_time" => Some(Self::PartTime),
            "contract" | "contract_employee" => Some(Self::Contract),
            _ => None,
        }
    }
}

/// One user→organisation assignment from a snapshot table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SnapshotRow {
    pub org_path: OrgPath,
    pub user_id: String,
    pub employee_type: EmploymentType,
    /// External group id; only previous-period rows carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Explicit rank. Derived from the path when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// Additional columns retained for attribute lists.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl SnapshotRow {
    pub fn new(
        org_path: impl Into<OrgPath>,
        user_id: impl Into<String>,
        employee_type: EmploymentType,
    ) -> Self {
        Self {
            org_path: org_path.into(),
            user_id: user_id.into(),
            employee_type,
            group_id: None,
            rank: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn with_extra(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(column.into(), value.into());
        self
    }

    pub fn effective_rank(&self) -> u32 {
        self.rank.unwrap_or_else(|| self.org_path.rank())
    }

    /// Resolve a column by name: built-in columns first, then `extra`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            EMPLOYEE_TYPE_ATTRIBUTE => Some(self.employee_type.as_str()),
            GROUP_ID_ATTRIBUTE => self.group_id.as_deref(),
            "org_path" => Some(self.org_path.as_str()),
            "user_id" => Some(self.user_id.as_str()),
            other => self.extra.get(other).map(String::as_str),
        }
    }
}
