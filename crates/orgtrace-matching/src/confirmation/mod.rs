//! Match confirmation: initial confirmation from scores, propagation across
//! records sharing an organisation, and the manual review merge.

pub mod review;

use std::collections::HashSet;

use orgtrace_core::config::PropagationMode;
use orgtrace_core::models::{ComparisonRecord, OrgPath};
use tracing::debug;

pub use review::{apply_review, validate_review, ReviewOutcome, ValidatedReview};

/// Reset every `confirmed` flag to the record's `same_org` verdict,
/// then propagate. Returns the number of confirmed records.
pub fn initial_confirmation(records: &mut [ComparisonRecord], mode: PropagationMode) -> usize {
    for record in records.iter_mut() {
        record.confirmed = record.same_org;
    }
    let seeded = records.iter().filter(|r| r.confirmed).count();
    let propagated = propagate(records, mode);
    debug!(seeded, propagated, "initial confirmation");
    seeded + propagated
}

/// Mark every record sharing a prev org or a curr org with a confirmed record
/// as confirmed. Returns the number of records newly confirmed.
///
/// `SinglePass` floods once from the confirmed set as it stands on entry, so
/// chains longer than one hop may stay open. `Fixpoint` repeats until no
/// record changes.
pub fn propagate(records: &mut [ComparisonRecord], mode: PropagationMode) -> usize {
    let mut total = 0;
    loop {
        let changed = propagate_once(records);
        total += changed;
        if changed == 0 || mode == PropagationMode::SinglePass {
            break;
        }
    }
    total
}

fn propagate_once(records: &mut [ComparisonRecord]) -> usize {
    let mut prev_orgs: HashSet<OrgPath> = HashSet::new();
    let mut curr_orgs: HashSet<OrgPath> = HashSet::new();
    for record in records.iter().filter(|r| r.confirmed) {
        prev_orgs.insert(record.prev_org.clone());
        curr_orgs.insert(record.curr_org.clone());
    }

    let mut changed = 0;
    for record in records.iter_mut().filter(|r| !r.confirmed) {
        if prev_orgs.contains(&record.prev_org) || curr_orgs.contains(&record.curr_org) {
            record.confirmed = true;
            changed += 1;
        }
    }
    changed
}
