//! Secure random salt generation

use zeroize::Zeroizing;

use crate::error::{HashError, Result};

/// Salt length in bytes when no salt is supplied (1024 hex characters)
pub const DEFAULT_SALT_LENGTH: usize = 512;

/// Generate `length` random bytes from the OS CSPRNG, hex encoded.
///
/// Runs on the blocking pool so callers never stall an async worker on the
/// system randomness source.
///
/// # Errors
///
/// Returns [`HashError::RandomSource`] if the OS randomness source fails.
pub async fn generate_salt(length: usize) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        let mut bytes = Zeroizing::new(vec![0u8; length]);
        getrandom::fill(&mut bytes)
            .map_err(|e| HashError::RandomSource(format!("failed to generate salt: {e}")))?;
        Ok(hex::encode(&*bytes))
    })
    .await
    .map_err(|e| HashError::internal(format!("salt generation task dropped: {e}")))?
}
