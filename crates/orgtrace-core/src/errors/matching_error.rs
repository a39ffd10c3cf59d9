use super::error_code::{self, OrgTraceErrorCode};

/// Matching-engine construction errors.
#[derive(Debug, thiserror::Error)]
pub enum MatchingError {
    #[error("no threshold rules configured; at least one catch-all rule is required")]
    EmptyThresholds,
}

impl OrgTraceErrorCode for MatchingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyThresholds => error_code::MATCHING_EMPTY_THRESHOLDS,
        }
    }
}
