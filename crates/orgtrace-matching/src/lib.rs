//! # orgtrace-matching
//!
//! Decides which organisations of a previous and a current org-chart
//! snapshot are the same organisation:
//! membership sets → pair scoring → confirmation → manual review merge.

pub mod candidates;
pub mod confirmation;
pub mod engine;
pub mod membership;
pub mod reports;
pub mod scoring;

pub use engine::{ComparisonEngine, ComparisonTable};
pub use membership::{build_membership, MembershipEntry, MembershipIndex};
pub use scoring::SimilarityScorer;
