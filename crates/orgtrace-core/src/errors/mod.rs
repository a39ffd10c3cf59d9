//! Error handling for orgtrace.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod matching_error;
pub mod review_error;

pub use config_error::ConfigError;
pub use error_code::OrgTraceErrorCode;
pub use matching_error::MatchingError;
pub use review_error::ReviewError;

/// Top-level error aggregating every subsystem error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum OrgTraceError {
    #[error("review validation error: {0}")]
    Review(#[from] ReviewError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("matching error: {0}")]
    Matching(#[from] MatchingError),
}

impl OrgTraceErrorCode for OrgTraceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Review(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Matching(e) => e.error_code(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type OrgTraceResult<T> = Result<T, OrgTraceError>;
