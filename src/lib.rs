//! PBKDF2 password hashing with self-describing hash records
//!
//! A hashed password is stored as a single portable string that carries the
//! derived key together with every parameter used to produce it:
//!
//! ```text
//! <key hex>:<salt>:<iterations>:<length>:<digest>
//! ```
//!
//! Verification decodes the record, re-derives the key with the embedded
//! parameters, and compares the re-encoded record against the input, so no
//! configuration has to be stored alongside the hash. Salt generation and
//! key derivation run on the blocking pool and are awaited; calls are
//! stateless and can run concurrently without coordination.
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> pwkdf::Result<()> {
//! use pwkdf::PasswordHasher;
//!
//! let hasher = PasswordHasher::new()
//!     .with_salt("test")
//!     .with_iterations(10_000)
//!     .with_length(32)
//!     .with_digest("sha1");
//!
//! let record = hasher.hash("hola").await?;
//! assert_eq!(
//!     record,
//!     "3bc3ff808fecfa016e9b62580012ecb9137be9fd8c4cbdecb3cd454e741c6b80:test:10000:32:sha1"
//! );
//! assert!(hasher.verify("hola", &record).await?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod digest;
pub mod entropy;
pub mod error;
pub mod hasher;
pub mod kdf;
pub mod record;

pub use digest::Digest;
pub use entropy::{generate_salt, DEFAULT_SALT_LENGTH};
pub use error::{HashError, Result};
pub use hasher::{
    hash_password, verify_password, PasswordHasher, DEFAULT_DIGEST, DEFAULT_ITERATIONS,
    DEFAULT_KEY_LENGTH, MIN_ITERATIONS, MIN_KEY_LENGTH,
};
pub use record::{HashRecord, DEFAULT_SEPARATOR};
