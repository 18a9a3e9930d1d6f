//! Error types for significance conversion

use thiserror::Error;

/// Errors for significance conversion
///
/// Every failure is a deterministic rejection of the caller's input. The
/// computation itself is closed-form and has no transient failure mode.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignificanceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SignificanceError>;

impl SignificanceError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
