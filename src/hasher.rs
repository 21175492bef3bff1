//! Password hashing and verification over self-describing records

use crate::entropy::{self, DEFAULT_SALT_LENGTH};
use crate::error::{HashError, Result};
use crate::kdf;
use crate::record::{HashRecord, DEFAULT_SEPARATOR};

/// Smallest accepted derived-key length in bytes
pub const MIN_KEY_LENGTH: usize = 32;

/// Smallest accepted PBKDF2 work factor
pub const MIN_ITERATIONS: u32 = 10_000;

/// Derived-key length used when the caller does not pick one
pub const DEFAULT_KEY_LENGTH: usize = 4096;

/// Work factor used when the caller does not pick one
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Digest used when the caller does not pick one
pub const DEFAULT_DIGEST: &str = "sha512";

/// Password hasher configuration.
///
/// Both operations are single-shot and stateless; a hasher can be shared or
/// rebuilt freely, and concurrent calls need no coordination. Verification
/// never reads the configured parameters: it re-derives with the values
/// embedded in the record, so records produced under different defaults
/// still verify.
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> pwkdf::Result<()> {
/// use pwkdf::PasswordHasher;
///
/// let hasher = PasswordHasher::new()
///     .with_iterations(10_000)
///     .with_length(32)
///     .with_digest("sha256");
///
/// let record = hasher.hash("hunter2").await?;
/// assert!(hasher.verify("hunter2", &record).await?);
/// assert!(!hasher.verify("*******", &record).await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    salt: Option<String>,
    iterations: u32,
    length: usize,
    digest: String,
    separator: String,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            salt: None,
            iterations: DEFAULT_ITERATIONS,
            length: DEFAULT_KEY_LENGTH,
            digest: DEFAULT_DIGEST.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl PasswordHasher {
    /// Create a hasher with the default parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed salt instead of generating one per hash.
    ///
    /// An empty salt counts as absent and a random one is generated.
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Set the PBKDF2 work factor
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the derived-key length in bytes
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the digest name, e.g. `"sha512"`
    #[must_use]
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = digest.into();
        self
    }

    /// Set the record field separator.
    ///
    /// Must match between `hash` and any later `verify` of its records.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Configured salt, if any
    #[must_use]
    pub fn salt(&self) -> Option<&str> {
        self.salt.as_deref()
    }

    /// Configured work factor
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Configured derived-key length in bytes
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Configured digest name
    #[must_use]
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Configured record separator
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Hash `password` into a self-describing record string.
    ///
    /// Parameters are validated up front; any failure aborts with no
    /// partial result. Without a configured salt, a random
    /// 512-byte salt is generated per call.
    ///
    /// # Errors
    ///
    /// [`HashError::InvalidKeyLength`] below 32 bytes,
    /// [`HashError::InvalidIterations`] below 10 000,
    /// [`HashError::UnsupportedDigest`] for unknown digest names, and
    /// [`HashError::RandomSource`] if salt generation fails.
    pub async fn hash(&self, password: &str) -> Result<String> {
        if self.length < MIN_KEY_LENGTH {
            return Err(HashError::InvalidKeyLength(self.length));
        }
        if self.iterations < MIN_ITERATIONS {
            return Err(HashError::InvalidIterations(self.iterations));
        }
        let salt = match self.salt.as_deref() {
            Some(salt) if !salt.is_empty() => salt.to_string(),
            _ => entropy::generate_salt(DEFAULT_SALT_LENGTH).await?,
        };
        let key = kdf::derive(
            password.to_string(),
            salt.clone(),
            self.iterations,
            self.length,
            &self.digest,
        )
        .await?;
        let record = HashRecord {
            key_hex: hex::encode(&*key),
            salt,
            iterations: self.iterations,
            length: self.length,
            digest: self.digest.clone(),
        };
        Ok(record.encode(&self.separator))
    }

    /// Check `password` against a previously produced `record`.
    ///
    /// The record is decoded and the password re-derived with the embedded
    /// salt, iterations, length, and digest, under the same validation rules
    /// as [`hash`](Self::hash). `Ok(false)` means the password does not
    /// match; structural and parameter problems are errors, never `false`.
    ///
    /// The final comparison is plain string equality of the two encoded
    /// records, matching the wire-format contract.
    ///
    /// # Errors
    ///
    /// [`HashError::MalformedRecord`] if the record does not decode, plus
    /// any error [`hash`](Self::hash) can return for the embedded
    /// parameters.
    pub async fn verify(&self, password: &str, record: &str) -> Result<bool> {
        let decoded = HashRecord::decode(record, &self.separator)?;
        let rehashed = Self {
            salt: Some(decoded.salt),
            iterations: decoded.iterations,
            length: decoded.length,
            digest: decoded.digest,
            separator: self.separator.clone(),
        }
        .hash(password)
        .await?;
        Ok(rehashed == record)
    }
}

/// Hash `password` with the default parameters
///
/// # Errors
///
/// Same as [`PasswordHasher::hash`].
pub async fn hash_password(password: &str) -> Result<String> {
    PasswordHasher::new().hash(password).await
}

/// Verify `password` against `record` using the default separator
///
/// # Errors
///
/// Same as [`PasswordHasher::verify`].
pub async fn verify_password(password: &str, record: &str) -> Result<bool> {
    PasswordHasher::new().verify(password, record).await
}
