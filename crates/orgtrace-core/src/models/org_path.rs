use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::PATH_SEPARATOR;

/// A `/`-separated organisation path such as `Sales/Inside Sales`.
///
/// Two paths denote the same node only when the strings are equal.
/// The empty string is a valid single-segment path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct OrgPath(String);

impl OrgPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hierarchy depth, counted from 1 at the top level.
    pub fn rank(&self) -> u32 {
        self.0.matches(PATH_SEPARATOR).count() as u32 + 1
    }

    /// Path components from the top level down.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }

    pub fn first_segment(&self) -> &str {
        self.0.split(PATH_SEPARATOR).next().unwrap_or(self.0.as_str())
    }

    pub fn last_segment(&self) -> &str {
        self.0.rsplit(PATH_SEPARATOR).next().unwrap_or(self.0.as_str())
    }

    /// The path with its last segment stripped, `None` at the top level.
    pub fn parent(&self) -> Option<OrgPath> {
        self.0
            .rfind(PATH_SEPARATOR)
            .map(|idx| OrgPath(self.0[..idx].to_string()))
    }

    /// Every ancestor path from the top level down to and including `self`.
    pub fn prefixes(&self) -> Vec<OrgPath> {
        let mut prefixes: Vec<OrgPath> = self
            .0
            .match_indices(PATH_SEPARATOR)
            .map(|(idx, _)| OrgPath(self.0[..idx].to_string()))
            .collect();
        prefixes.push(self.clone());
        prefixes
    }
}

impl fmt::Display for OrgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrgPath {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OrgPath {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for OrgPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OrgPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
