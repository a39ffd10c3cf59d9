use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::OrgPath;

/// Review marker of a manually reviewed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReviewMarker {
    Confirmed,
    Unreviewed,
}

impl ReviewMarker {
    /// Parse a marker cell. The review sheet's `⚪︎` and `-` glyphs are
    /// accepted for `confirmed` and `unreviewed`; anything else, padded
    /// literals included, is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "confirmed" | "⚪︎" => Some(Self::Confirmed),
            "unreviewed" | "-" => Some(Self::Unreviewed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Unreviewed => "unreviewed",
        }
    }
}

/// One row of the externally reviewed table. The marker is kept raw until
/// the table is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReviewRow {
    pub prev_org: OrgPath,
    pub curr_org: OrgPath,
    pub review_marker: String,
}

impl ReviewRow {
    pub fn new(
        prev_org: impl Into<OrgPath>,
        curr_org: impl Into<OrgPath>,
        marker: ReviewMarker,
    ) -> Self {
        Self {
            prev_org: prev_org.into(),
            curr_org: curr_org.into(),
            review_marker: marker.as_str().to_string(),
        }
    }
}
