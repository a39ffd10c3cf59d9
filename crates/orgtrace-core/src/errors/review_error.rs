use super::error_code::{self, OrgTraceErrorCode};

/// Manual review table validation errors.
///
/// Row numbers are zero-based indices into the review table as supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("row {row}: review marker {value:?} is neither \"confirmed\" nor \"unreviewed\"")]
    InvalidMarker { row: usize, value: String },

    #[error("previous org {org:?} is confirmed more than once (rows {rows:?})")]
    DuplicatePrevOrg { org: String, rows: Vec<usize> },

    #[error("current org {org:?} is confirmed more than once (rows {rows:?})")]
    DuplicateCurrOrg { org: String, rows: Vec<usize> },
}

impl OrgTraceErrorCode for ReviewError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMarker { .. } => error_code::REVIEW_INVALID_MARKER,
            Self::DuplicatePrevOrg { .. } => error_code::REVIEW_DUPLICATE_PREV_ORG,
            Self::DuplicateCurrOrg { .. } => error_code::REVIEW_DUPLICATE_CURR_ORG,
        }
    }
}
