//! ComparisonEngine: membership → candidates → confirmation, plus the manual
//! review merge over the resulting table.

use orgtrace_core::config::{MatchingConfig, MembershipConfig, OrgTraceConfig};
use orgtrace_core::constants::DEFAULT_REVIEW_MAX_RANK_DIFF;
use orgtrace_core::errors::OrgTraceResult;
use orgtrace_core::models::{ComparisonRecord, DisjointOrg, ReviewRow, SnapshotRow};
use orgtrace_core::traits::IPairScorer;
use orgtrace_core::{matching_span, membership_span, review_span};
use serde::Serialize;
use tracing::info;

use crate::candidates::generate_candidates;
use crate::confirmation::{self, ReviewOutcome};
use crate::membership::build_membership;
use crate::reports::{self, ReconciliationSummary};
use crate::scoring::SimilarityScorer;

/// Reconciled comparison table of two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub records: Vec<ComparisonRecord>,
    /// Organisations with no member overlap in the other snapshot.
    pub disjoint: Vec<DisjointOrg>,
}

impl ComparisonTable {
    pub fn summary(&self) -> ReconciliationSummary {
        ReconciliationSummary::of(&self.records)
    }

    pub fn unconfirmed(&self) -> Vec<&ComparisonRecord> {
        reports::unconfirmed(&self.records)
    }

    /// Unconfirmed rows within the default rank-difference window, sorted
    /// for the review sheet.
    pub fn unconfirmed_for_review(&self) -> Vec<&ComparisonRecord> {
        reports::unconfirmed_for_review(&self.records, DEFAULT_REVIEW_MAX_RANK_DIFF)
    }

    /// Pairs the rename simulator acts on, in table order.
    pub fn confirmed_matches(&self) -> Vec<&ComparisonRecord> {
        self.records
            .iter()
            .filter(|r| r.same_org && r.confirmed)
            .collect()
    }
}

/// The matching engine.
///
/// Holds an immutable scorer and configuration; every call works on the
/// snapshots it is given.
pub struct ComparisonEngine {
    scorer: Box<dyn IPairScorer>,
    matching: MatchingConfig,
    membership: MembershipConfig,
}

impl ComparisonEngine {
    /// Engine with the default [`SimilarityScorer`].
    pub fn new(matching: MatchingConfig, membership: MembershipConfig) -> OrgTraceResult<Self> {
        let scorer = SimilarityScorer::new(&matching)?;
        Ok(Self::with_scorer(Box::new(scorer), matching, membership))
    }

    pub fn from_config(config: &OrgTraceConfig) -> OrgTraceResult<Self> {
        Self::new(config.matching.clone(), config.membership.clone())
    }

    /// Engine with a caller-supplied scorer.
    pub fn with_scorer(
        scorer: Box<dyn IPairScorer>,
        matching: MatchingConfig,
        membership: MembershipConfig,
    ) -> Self {
        Self {
            scorer,
            matching,
            membership,
        }
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Score every overlapping pair and derive the initial confirmed set.
    pub fn compare(&self, prev_rows: &[SnapshotRow], curr_rows: &[SnapshotRow]) -> ComparisonTable {
        let prev = {
            let _span = membership_span!("prev", prev_rows.len()).entered();
            build_membership(prev_rows, &self.membership)
        };
        let curr = {
            let _span = membership_span!("curr", curr_rows.len()).entered();
            build_membership(curr_rows, &self.membership)
        };

        let _span = matching_span!(prev.len(), curr.len()).entered();
        let mut records =
            generate_candidates(&prev, &curr, self.scorer.as_ref(), self.matching.parallel);
        let confirmed = confirmation::initial_confirmation(&mut records, self.matching.propagation);
        let disjoint = reports::find_disjoint_orgs(&records, &prev, &curr);

        info!(
            records = records.len(),
            confirmed,
            disjoint = disjoint.len(),
            propagation = ?self.matching.propagation,
            "comparison table built"
        );

        ComparisonTable { records, disjoint }
    }

    /// Merge a reviewed table and re-propagate. The review table is validated
    /// in full first; on error the comparison table is left untouched.
    pub fn apply_review(
        &self,
        table: &mut ComparisonTable,
        review_rows: &[ReviewRow],
    ) -> OrgTraceResult<ReviewOutcome> {
        let _span = review_span!(review_rows.len()).entered();

        let validated = confirmation::validate_review(review_rows)?;
        let outcome =
            confirmation::apply_review(&mut table.records, &validated, self.matching.propagation);

        info!(
            confirmed_rows = validated.confirmed.len(),
            unreviewed_rows = validated.unreviewed,
            reset = outcome.reset,
            matched = outcome.matched_pairs,
            missing = outcome.missing_pairs.len(),
            propagated = outcome.propagated,
            "review merged"
        );

        Ok(outcome)
    }
}
