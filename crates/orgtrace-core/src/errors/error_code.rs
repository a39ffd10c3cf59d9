//! Stable machine-readable error codes for the boundary layer.

pub const REVIEW_INVALID_MARKER: &str = "ORGTRACE_REVIEW_INVALID_MARKER";
pub const REVIEW_DUPLICATE_PREV_ORG: &str = "ORGTRACE_REVIEW_DUPLICATE_PREV_ORG";
pub const REVIEW_DUPLICATE_CURR_ORG: &str = "ORGTRACE_REVIEW_DUPLICATE_CURR_ORG";
pub const CONFIG_FILE_NOT_FOUND: &str = "ORGTRACE_CONFIG_FILE_NOT_FOUND";
pub const CONFIG_PARSE: &str = "ORGTRACE_CONFIG_PARSE";
pub const CONFIG_VALIDATION: &str = "ORGTRACE_CONFIG_VALIDATION";
pub const MATCHING_EMPTY_THRESHOLDS: &str = "ORGTRACE_MATCHING_EMPTY_THRESHOLDS";

/// Implemented by every orgtrace error type.
pub trait OrgTraceErrorCode {
    fn error_code(&self) -> &'static str;
}
