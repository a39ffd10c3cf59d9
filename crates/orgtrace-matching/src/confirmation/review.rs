//! Manual review merge: validate the reviewed table, then let its confirmed
//! pairs override the automatic verdicts.

use std::collections::{HashMap, HashSet};

use orgtrace_core::config::PropagationMode;
use orgtrace_core::errors::ReviewError;
use orgtrace_core::models::{ComparisonRecord, OrgPath, ReviewMarker, ReviewRow};
use serde::Serialize;
use tracing::{debug, warn};

use super::propagate;

/// A review table that passed validation. Only confirmed pairs are kept;
/// unreviewed rows never act on the comparison table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedReview {
    pub confirmed: Vec<(OrgPath, OrgPath)>,
    pub unreviewed: usize,
}

impl ValidatedReview {
    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty()
    }
}

/// What the merge changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewOutcome {
    /// Records whose verdict was cleared because they touch a reviewed org.
    pub reset: usize,
    /// Records set to confirmed by an exact reviewed pair.
    pub matched_pairs: usize,
    /// Reviewed pairs with no comparison record (no member overlap).
    pub missing_pairs: Vec<(OrgPath, OrgPath)>,
    /// Records confirmed by re-propagation.
    pub propagated: usize,
}

/// Check every marker and reject duplicate prev or curr orgs among the
/// confirmed rows. Fails on the first problem found, markers first.
pub fn validate_review(rows: &[ReviewRow]) -> Result<ValidatedReview, ReviewError> {
    let mut validated = ValidatedReview::default();
    let mut confirmed_rows = Vec::new();

    for (row, review) in rows.iter().enumerate() {
        match ReviewMarker::parse(&review.review_marker) {
            Some(ReviewMarker::Confirmed) => {
                confirmed_rows.push(row);
                validated
                    .confirmed
                    .push((review.prev_org.clone(), review.curr_org.clone()));
            }
            Some(ReviewMarker::Unreviewed) => validated.unreviewed += 1,
            None => {
                return Err(ReviewError::InvalidMarker {
                    row,
                    value: review.review_marker.clone(),
                })
            }
        }
    }

    if let Some((org, rows)) = first_duplicate(&confirmed_rows, |i| &rows[i].prev_org) {
        return Err(ReviewError::DuplicatePrevOrg { org, rows });
    }
    if let Some((org, rows)) = first_duplicate(&confirmed_rows, |i| &rows[i].curr_org) {
        return Err(ReviewError::DuplicateCurrOrg { org, rows });
    }

    Ok(validated)
}

/// First org (in row order) appearing on more than one of `rows`, with every
/// row it appears on.
fn first_duplicate<'a>(
    rows: &[usize],
    key: impl Fn(usize) -> &'a OrgPath,
) -> Option<(String, Vec<usize>)> {
    let mut seen: HashMap<&OrgPath, Vec<usize>> = HashMap::new();
    let mut order: Vec<&OrgPath> = Vec::new();
    for &row in rows {
        let org = key(row);
        let hits = seen.entry(org).or_default();
        if hits.is_empty() {
            order.push(org);
        }
        hits.push(row);
    }
    order.into_iter().find_map(|org| {
        let hits = &seen[org];
        (hits.len() > 1).then(|| (org.as_str().to_string(), hits.clone()))
    })
}

/// Clear every record touching a reviewed org, confirm the reviewed pairs,
/// then re-propagate. All resets land before any confirmation, so the result
/// does not depend on review row order.
pub fn apply_review(
    records: &mut [ComparisonRecord],
    review: &ValidatedReview,
    mode: PropagationMode,
) -> ReviewOutcome {
    let mut outcome = ReviewOutcome::default();

    let prev_orgs: HashSet<&OrgPath> = review.confirmed.iter().map(|(p, _)| p).collect();
    let curr_orgs: HashSet<&OrgPath> = review.confirmed.iter().map(|(_, c)| c).collect();
    for record in records.iter_mut() {
        if prev_orgs.contains(&record.prev_org) || curr_orgs.contains(&record.curr_org) {
            record.same_org = false;
            record.confirmed = false;
            outcome.reset += 1;
        }
    }

    for (prev_org, curr_org) in &review.confirmed {
        let mut hit = false;
        for record in records
            .iter_mut()
            .filter(|r| r.prev_org == *prev_org && r.curr_org == *curr_org)
        {
            record.same_org = true;
            record.confirmed = true;
            hit = true;
            outcome.matched_pairs += 1;
        }
        if hit {
            debug!(prev_org = %prev_org, curr_org = %curr_org, "reviewed pair confirmed");
        } else {
            warn!(
                prev_org = %prev_org,
                curr_org = %curr_org,
                "reviewed pair has no comparison record"
            );
            outcome
                .missing_pairs
                .push((prev_org.clone(), curr_org.clone()));
        }
    }

    outcome.propagated = propagate(records, mode);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgtrace_core::models::{PairMetrics, ScoreBreakdown};

    fn review(prev: &str, curr: &str, marker: &str) -> ReviewRow {
        ReviewRow {
            prev_org: prev.into(),
            curr_org: curr.into(),
            review_marker: marker.to_string(),
        }
    }

    fn record(prev: &str, curr: &str, same_org: bool) -> ComparisonRecord {
        let mut r = ComparisonRecord::from_parts(
            PairMetrics {
                prev_org: prev.into(),
                curr_org: curr.into(),
                prev_size: 4,
                curr_size: 4,
                common_members: 2,
                common_ratio: 0.5,
                similarity_index: 0.33,
                rank_diff: 0,
                composition_ratio_diff: 1.0,
            },
            ScoreBreakdown {
                rank_score: 2.0,
                similarity_score: 0.0,
                member_score: 0.0,
                total_score: 2.0,
                applied_rule: "small".to_string(),
                same_org,
            },
        );
        r.confirmed = same_org;
        r
    }

    #[test]
    fn invalid_marker_reports_its_row() {
        let rows = vec![review("A", "A", "confirmed"), review("B", "B", "yes")];
        assert_eq!(
            validate_review(&rows),
            Err(ReviewError::InvalidMarker {
                row: 1,
                value: "yes".to_string()
            })
        );
    }

    #[test]
    fn padded_marker_is_not_a_literal() {
        let rows = vec![review("A", "A", " confirmed ")];
        assert_eq!(
            validate_review(&rows),
            Err(ReviewError::InvalidMarker {
                row: 0,
                value: " confirmed ".to_string()
            })
        );
    }

    #[test]
    fn duplicate_confirmed_prev_org_is_rejected() {
        let rows = vec![
            review("A", "X", "confirmed"),
            review("B", "Y", "confirmed"),
            review("A", "Z", "⚪︎"),
        ];
        assert_eq!(
            validate_review(&rows),
            Err(ReviewError::DuplicatePrevOrg {
                org: "A".to_string(),
                rows: vec![0, 2]
            })
        );
    }

    #[test]
    fn duplicate_confirmed_curr_org_is_rejected() {
        let rows = vec![review("A", "X", "confirmed"), review("B", "X", "confirmed")];
        assert!(matches!(
            validate_review(&rows),
            Err(ReviewError::DuplicateCurrOrg { ref org, .. }) if org == "X"
        ));
    }

    #[test]
    fn duplicates_among_unreviewed_rows_are_allowed() {
        let rows = vec![
            review("A", "X", "confirmed"),
            review("A", "Y", "unreviewed"),
            review("A", "Z", "-"),
        ];
        let validated = validate_review(&rows).unwrap();
        assert_eq!(validated.confirmed.len(), 1);
        assert_eq!(validated.unreviewed, 2);
    }

    #[test]
    fn reviewed_pair_overrides_automatic_verdicts() {
        let mut records = vec![
            record("A", "X", true),
            record("A", "Y", false),
            record("B", "Z", false),
        ];
        let validated = validate_review(&[review("A", "Y", "confirmed")]).unwrap();
        let outcome = apply_review(&mut records, &validated, PropagationMode::SinglePass);

        assert_eq!(outcome.reset, 2);
        assert_eq!(outcome.matched_pairs, 1);
        assert!(records[1].same_org && records[1].confirmed);
        // A-X loses its verdict but is re-confirmed through the shared prev org.
        assert!(!records[0].same_org);
        assert!(records[0].confirmed);
        assert!(!records[2].confirmed);
    }

    #[test]
    fn unreviewed_rows_never_confirm() {
        let mut records = vec![record("A", "X", false)];
        let validated = validate_review(&[review("A", "X", "unreviewed")]).unwrap();
        let outcome = apply_review(&mut records, &validated, PropagationMode::SinglePass);
        assert_eq!(outcome, ReviewOutcome::default());
        assert!(!records[0].confirmed);
    }

    #[test]
    fn missing_pair_is_reported_not_inserted() {
        let mut records = vec![record("A", "X", false)];
        let validated = validate_review(&[review("Q", "R", "confirmed")]).unwrap();
        let outcome = apply_review(&mut records, &validated, PropagationMode::SinglePass);
        assert_eq!(
            outcome.missing_pairs,
            vec![(OrgPath::from("Q"), OrgPath::from("R"))]
        );
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn merge_is_independent_of_row_order() {
        let base = vec![
            record("A", "X", true),
            record("B", "X", false),
            record("B", "Y", true),
            record("C", "Y", false),
        ];
        let forward = vec![review("A", "X", "confirmed"), review("C", "Y", "confirmed")];
        let backward: Vec<ReviewRow> = forward.iter().rev().cloned().collect();

        let mut a = base.clone();
        let mut b = base;
        apply_review(&mut a, &validate_review(&forward).unwrap(), PropagationMode::SinglePass);
        apply_review(&mut b, &validate_review(&backward).unwrap(), PropagationMode::SinglePass);
        assert_eq!(a, b);
    }
}
