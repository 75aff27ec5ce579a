use thiserror::Error;

/// Errors raised while validating or installing policy sets.
///
/// Evaluation itself never fails; a malformed request simply fails to
/// match and falls through to the default deny.
#[derive(Debug, Error)]
pub enum AuthzError {
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("invalid reason code: {0}")]
    InvalidReason(String),
}

pub type AuthzResult<T> = Result<T, AuthzError>;
