//! Span definitions per phase: membership, matching, review, simulation.

/// Create a membership-building span.
#[macro_export]
macro_rules! membership_span {
    ($snapshot:expr, $rows:expr) => {
        tracing::info_span!("orgtrace.membership", snapshot = %$snapshot, rows = $rows)
    };
}

/// Create a candidate-matching span.
#[macro_export]
macro_rules! matching_span {
    ($prev_orgs:expr, $curr_orgs:expr) => {
        tracing::info_span!(
            "orgtrace.matching",
            prev_orgs = $prev_orgs,
            curr_orgs = $curr_orgs
        )
    };
}

/// Create a review-merge span.
#[macro_export]
macro_rules! review_span {
    ($review_rows:expr) => {
        tracing::info_span!("orgtrace.review", review_rows = $review_rows)
    };
}

/// Create a rename-simulation span.
#[macro_export]
macro_rules! simulation_span {
    ($nodes:expr, $renames:expr) => {
        tracing::info_span!("orgtrace.simulation", nodes = $nodes, renames = $renames)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MEMBERSHIP: &str = "orgtrace.membership";
    pub const MATCHING: &str = "orgtrace.matching";
    pub const REVIEW: &str = "orgtrace.review";
    pub const SIMULATION: &str = "orgtrace.simulation";
}
