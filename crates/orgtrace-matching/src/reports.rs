//! Read-only views over a reconciled comparison table.

use std::collections::HashSet;

use orgtrace_core::models::{ComparisonRecord, DisjointOrg, OrgLifecycle, OrgPath};
use serde::Serialize;

use crate::membership::MembershipIndex;

/// Record counts of a comparison table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationSummary {
    pub records: usize,
    pub same_org: usize,
    pub confirmed: usize,
    pub unconfirmed: usize,
}

impl ReconciliationSummary {
    pub fn of(records: &[ComparisonRecord]) -> Self {
        let confirmed = records.iter().filter(|r| r.confirmed).count();
        Self {
            records: records.len(),
            same_org: records.iter().filter(|r| r.same_org).count(),
            confirmed,
            unconfirmed: records.len() - confirmed,
        }
    }
}

pub fn unconfirmed(records: &[ComparisonRecord]) -> Vec<&ComparisonRecord> {
    records.iter().filter(|r| !r.confirmed).collect()
}

/// Unconfirmed records worth a manual look: `rank_diff <= max_rank_diff`
/// (signed, so moves deeper into the hierarchy always qualify), ordered by
/// `rank_diff` then `prev_org`.
pub fn unconfirmed_for_review(
    records: &[ComparisonRecord],
    max_rank_diff: i32,
) -> Vec<&ComparisonRecord> {
    let mut rows: Vec<&ComparisonRecord> = records
        .iter()
        .filter(|r| !r.confirmed && r.rank_diff <= max_rank_diff)
        .collect();
    rows.sort_by(|a, b| {
        a.rank_diff
            .cmp(&b.rank_diff)
            .then_with(|| a.prev_org.cmp(&b.prev_org))
    });
    rows
}

/// Organisations that appear in no comparison record: prev-only ones were
/// abolished, curr-only ones established. Abolished first, each group sorted
/// by path.
pub fn find_disjoint_orgs(
    records: &[ComparisonRecord],
    prev: &MembershipIndex,
    curr: &MembershipIndex,
) -> Vec<DisjointOrg> {
    let matched_prev: HashSet<&OrgPath> = records.iter().map(|r| &r.prev_org).collect();
    let matched_curr: HashSet<&OrgPath> = records.iter().map(|r| &r.curr_org).collect();

    let collect = |index: &MembershipIndex, matched: &HashSet<&OrgPath>, status: OrgLifecycle| {
        let mut orgs: Vec<DisjointOrg> = index
            .paths()
            .filter(|p| !matched.contains(*p))
            .map(|p| DisjointOrg {
                org: p.clone(),
                status,
            })
            .collect();
        orgs.sort_by(|a, b| a.org.cmp(&b.org));
        orgs
    };

    let mut disjoint = collect(prev, &matched_prev, OrgLifecycle::Abolished);
    disjoint.extend(collect(curr, &matched_curr, OrgLifecycle::Established));
    disjoint
}
