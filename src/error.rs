//! Error handling for password hashing operations

use thiserror::Error;

/// Errors surfaced by hashing, verification, and record parsing
#[derive(Debug, Error)]
pub enum HashError {
    #[error("invalid key length: {0} is below the {min} byte minimum", min = crate::hasher::MIN_KEY_LENGTH)]
    InvalidKeyLength(usize),

    #[error("invalid number of iterations: {0} is below the {min} minimum", min = crate::hasher::MIN_ITERATIONS)]
    InvalidIterations(u32),

    #[error("unsupported digest: {0:?}")]
    UnsupportedDigest(String),

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("random source failure: {0}")]
    RandomSource(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a malformed-record error
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRecord(msg.into())
    }
}

/// Result type for password hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
