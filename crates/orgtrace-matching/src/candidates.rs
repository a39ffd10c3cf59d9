//! Candidate generation: score every (prev org, curr org) pair whose member
//! sets intersect.

use orgtrace_core::models::{ComparisonRecord, OrgPath, PairMetrics};
use orgtrace_core::traits::IPairScorer;
use rayon::prelude::*;
use tracing::info;

use crate::membership::{composition_ratio_diff, EmploymentMix, MembershipEntry, MembershipIndex};

/// One side of a candidate pair, with its composition precomputed.
struct Side<'a> {
    org: &'a OrgPath,
    entry: &'a MembershipEntry,
    mix: EmploymentMix,
}

impl<'a> Side<'a> {
    fn new(org: &'a OrgPath, entry: &'a MembershipEntry) -> Self {
        Self {
            org,
            entry,
            mix: EmploymentMix::of(entry),
        }
    }
}

/// Overlap metrics of a pair, `None` when the member sets are disjoint.
///
/// Both sizes are non-zero whenever the intersection is, so the ratios never
/// divide by zero.
pub fn pair_metrics(
    prev_org: &OrgPath,
    prev: &MembershipEntry,
    curr_org: &OrgPath,
    curr: &MembershipEntry,
) -> Option<PairMetrics> {
    metrics_for(&Side::new(prev_org, prev), &Side::new(curr_org, curr))
}

fn metrics_for(prev: &Side<'_>, curr: &Side<'_>) -> Option<PairMetrics> {
    let common = prev.entry.intersection_size(curr.entry);
    if common == 0 {
        return None;
    }
    let prev_size = prev.entry.size();
    let curr_size = curr.entry.size();
    let union = prev_size + curr_size - common;

    Some(PairMetrics {
        prev_org: prev.org.clone(),
        curr_org: curr.org.clone(),
        prev_size,
        curr_size,
        common_members: common,
        common_ratio: common as f64 / curr_size as f64,
        similarity_index: common as f64 / union as f64,
        rank_diff: prev.org.rank() as i32 - curr.org.rank() as i32,
        composition_ratio_diff: composition_ratio_diff(&prev.mix, &curr.mix),
    })
}

/// Score the cross product of both snapshots' organisations.
///
/// Output order is prev-org order, then curr-org order, whether or not the
/// pairs are scored on the rayon pool.
pub fn generate_candidates(
    prev: &MembershipIndex,
    curr: &MembershipIndex,
    scorer: &dyn IPairScorer,
    parallel: bool,
) -> Vec<ComparisonRecord> {
    let curr_sides: Vec<Side<'_>> = curr.iter().map(|(org, entry)| Side::new(org, entry)).collect();

    let score_row = |(prev_org, prev_entry): &(OrgPath, MembershipEntry)| -> Vec<ComparisonRecord> {
        let prev_side = Side::new(prev_org, prev_entry);
        curr_sides
            .iter()
            .filter_map(|curr_side| {
                let metrics = metrics_for(&prev_side, curr_side)?;
                let score = scorer.score(&metrics);
                Some(ComparisonRecord::from_parts(metrics, score))
            })
            .collect()
    };

    let records: Vec<ComparisonRecord> = if parallel {
        prev.entries().par_iter().flat_map_iter(score_row).collect()
    } else {
        prev.entries().iter().flat_map(score_row).collect()
    };

    info!(
        scorer = scorer.name(),
        prev_orgs = prev.len(),
        curr_orgs = curr.len(),
        candidates = records.len(),
        same_org = records.iter().filter(|r| r.same_org).count(),
        "candidate pairs scored"
    );

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgtrace_core::config::{MatchingConfig, MembershipConfig};
    use orgtrace_core::models::{EmploymentType, SnapshotRow};

    use crate::membership::build_membership;
    use crate::scoring::SimilarityScorer;

    fn rows(assignments: &[(&str, &str)]) -> Vec<SnapshotRow> {
        assignments
            .iter()
            .map(|(org, user)| SnapshotRow::new(*org, *user, EmploymentType::FullTime))
            .collect()
    }

    #[test]
    fn disjoint_pairs_are_dropped() {
        let prev = build_membership(&rows(&[("A", "u1"), ("B", "u2")]), &MembershipConfig::default());
        let curr = build_membership(&rows(&[("A", "u1"), ("C", "u3")]), &MembershipConfig::default());
        let scorer = SimilarityScorer::new(&MatchingConfig::default()).unwrap();

        let records = generate_candidates(&prev, &curr, &scorer, false);
        assert_eq!(records.len(), 1);
        assert!(records[0].is_pair("A", "A"));
    }

    #[test]
    fn metrics_match_hand_computation() {
        let prev = build_membership(
            &rows(&[("Sales", "a"), ("Sales", "b"), ("Sales", "c")]),
            &MembershipConfig::default(),
        );
        let curr = build_membership(
            &rows(&[("Sales/East", "a"), ("Sales/East", "b"), ("Sales/East", "d"), ("Sales/East", "e")]),
            &MembershipConfig::default(),
        );
        let m = pair_metrics(
            &OrgPath::from("Sales"),
            prev.get("Sales").unwrap(),
            &OrgPath::from("Sales/East"),
            curr.get("Sales/East").unwrap(),
        )
        .unwrap();

        assert_eq!(m.common_members, 2);
        assert!((m.common_ratio - 0.5).abs() < 1e-9);
        assert!((m.similarity_index - 2.0 / 5.0).abs() < 1e-9);
        assert_eq!(m.rank_diff, -1);
        assert!((m.composition_ratio_diff - 1.0).abs() < 1e-9);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let assignments: Vec<(String, String)> = (0..40)
            .map(|i| (format!("D{}/T{}", i % 4, i % 7), format!("u{i}")))
            .collect();
        let prev_rows: Vec<SnapshotRow> = assignments
            .iter()
            .map(|(o, u)| SnapshotRow::new(o.as_str(), u.as_str(), EmploymentType::FullTime))
            .collect();
        let curr_rows: Vec<SnapshotRow> = assignments
            .iter()
            .map(|(o, u)| SnapshotRow::new(format!("{o}/X").as_str(), u.as_str(), EmploymentType::PartTime))
            .collect();
        let prev = build_membership(&prev_rows, &MembershipConfig::default());
        let curr = build_membership(&curr_rows, &MembershipConfig::default());
        let scorer = SimilarityScorer::new(&MatchingConfig::default()).unwrap();

        let seq = generate_candidates(&prev, &curr, &scorer, false);
        let par = generate_candidates(&prev, &curr, &scorer, true);
        assert_eq!(seq, par);
        assert!(!seq.is_empty());
    }
}
