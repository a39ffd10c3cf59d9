//! Membership set builder: flat user rows → cumulative member sets per
//! organisation path, ancestors included.

mod composition;

use std::collections::{HashMap, HashSet};

use orgtrace_core::config::MembershipConfig;
use orgtrace_core::models::{OrgPath, SnapshotRow};
use tracing::{debug, warn};

pub use composition::{composition_ratio_diff, EmploymentMix};

/// Members and collected attribute values of one organisation, accumulated
/// from the organisation itself and every descendant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembershipEntry {
    pub members: HashSet<String>,
    /// Attribute name → one value per contributing user row, in row order.
    pub attributes: HashMap<String, Vec<String>>,
}

impl MembershipEntry {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn attribute(&self, name: &str) -> &[String] {
        self.attributes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of members shared with `other`.
    pub fn intersection_size(&self, other: &MembershipEntry) -> usize {
        let (small, large) = if self.members.len() <= other.members.len() {
            (&self.members, &other.members)
        } else {
            (&other.members, &self.members)
        };
        small.iter().filter(|m| large.contains(*m)).count()
    }
}

/// Membership entries of one snapshot, in first-seen path order.
///
/// Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct MembershipIndex {
    entries: Vec<(OrgPath, MembershipEntry)>,
    positions: HashMap<OrgPath, usize>,
}

impl MembershipIndex {
    pub fn get(&self, org: &str) -> Option<&MembershipEntry> {
        self.positions.get(org).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains(&self, org: &str) -> bool {
        self.positions.contains_key(org)
    }

    pub fn entries(&self) -> &[(OrgPath, MembershipEntry)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OrgPath, &MembershipEntry)> {
        self.entries.iter().map(|(path, entry)| (path, entry))
    }

    pub fn paths(&self) -> impl Iterator<Item = &OrgPath> {
        self.entries.iter().map(|(path, _)| path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, path: OrgPath) -> &mut MembershipEntry {
        let idx = match self.positions.get(&path) {
            Some(&idx) => idx,
            None => {
                self.entries.push((path.clone(), MembershipEntry::default()));
                self.positions.insert(path, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }
}

/// Build the membership index of one snapshot.
///
/// Every row adds its user to the row's path and to every ancestor prefix,
/// and appends each configured attribute value to the same entries. Rows
/// whose top-level segment is the configured "no organisation" sentinel are
/// skipped entirely.
pub fn build_membership(rows: &[SnapshotRow], config: &MembershipConfig) -> MembershipIndex {
    let mut index = MembershipIndex::default();
    let mut skipped = 0usize;
    let mut missing_attributes = 0usize;

    for row in rows {
        if row.org_path.first_segment() == config.root_sentinel {
            skipped += 1;
            continue;
        }

        let values: Vec<(&str, Option<&str>)> = config
            .attribute_columns
            .iter()
            .map(|column| (column.as_str(), row.attribute(column)))
            .collect();
        missing_attributes += values.iter().filter(|(_, v)| v.is_none()).count();

        for prefix in row.org_path.prefixes() {
            let entry = index.entry_mut(prefix);
            entry.members.insert(row.user_id.clone());
            for (column, value) in &values {
                if let Some(value) = value {
                    entry
                        .attributes
                        .entry((*column).to_string())
                        .or_default()
                        .push((*value).to_string());
                }
            }
        }
    }

    if missing_attributes > 0 {
        warn!(
            missing = missing_attributes,
            "attribute columns missing on some snapshot rows"
        );
    }
    debug!(
        rows = rows.len(),
        skipped,
        orgs = index.len(),
        "membership index built"
    );

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgtrace_core::models::EmploymentType;

    fn row(org: &str, user: &str) -> SnapshotRow {
        SnapshotRow::new(org, user, EmploymentType::FullTime)
    }

    #[test]
    fn users_accumulate_into_every_ancestor() {
        let rows = vec![row("A/B/C", "u1"), row("A/B", "u2"), row("A", "u3")];
        let index = build_membership(&rows, &MembershipConfig::default());

        assert_eq!(index.get("A").unwrap().size(), 3);
        assert_eq!(index.get("A/B").unwrap().size(), 2);
        assert_eq!(index.get("A/B/C").unwrap().size(), 1);
    }

    #[test]
    fn attributes_append_one_value_per_row() {
        let rows = vec![
            SnapshotRow::new("A/B", "u1", EmploymentType::PartTime),
            SnapshotRow::new("A", "u2", EmploymentType::FullTime),
        ];
        let index = build_membership(&rows, &MembershipConfig::default());

        assert_eq!(index.get("A").unwrap().attribute("employee_type"), &["part_time", "full_time"]);
        assert_eq!(index.get("A/B").unwrap().attribute("employee_type"), &["part_time"]);
    }

    #[test]
    fn sentinel_and_its_children_are_skipped() {
        let rows = vec![row("組織", "u1"), row("組織/A", "u2"), row("Sales", "u3")];
        let index = build_membership(&rows, &MembershipConfig::default());

        assert_eq!(index.len(), 1);
        assert!(index.contains("Sales"));
        assert!(!index.contains("組織"));
        assert!(!index.contains("組織/A"));
    }

    #[test]
    fn empty_path_is_a_single_segment_org() {
        let index = build_membership(&[row("", "u1")], &MembershipConfig::default());
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("").unwrap().size(), 1);
    }

    #[test]
    fn index_preserves_first_seen_order() {
        let rows = vec![row("B/X", "u1"), row("A", "u2"), row("B", "u3")];
        let index = build_membership(&rows, &MembershipConfig::default());
        let paths: Vec<&str> = index.paths().map(|p| p.as_str()).collect();
        assert_eq!(paths, vec!["B", "B/X", "A"]);
    }

    #[test]
    fn duplicate_user_rows_count_once_in_members() {
        let rows = vec![row("A", "u1"), row("A", "u1")];
        let index = build_membership(&rows, &MembershipConfig::default());
        let entry = index.get("A").unwrap();
        assert_eq!(entry.size(), 1);
        assert_eq!(entry.attribute("employee_type").len(), 2);
    }
}
