//! PBKDF2 key derivation

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use crate::digest::Digest;
use crate::error::{HashError, Result};

/// Derive `length` bytes from `password` and `salt` with PBKDF2.
///
/// The digest name is resolved here, so an unrecognized name fails with
/// [`HashError::UnsupportedDigest`] before any work is done. Derivation is
/// CPU-bound and runs on the blocking pool; the caller's task stays free
/// while awaiting. Identical inputs always produce identical output bytes.
pub async fn derive(
    password: String,
    salt: String,
    iterations: u32,
    length: usize,
    digest: &str,
) -> Result<Zeroizing<Vec<u8>>> {
    let digest: Digest = digest.parse()?;
    tokio::task::spawn_blocking(move || {
        let mut key = Zeroizing::new(vec![0u8; length]);
        match digest {
            Digest::Sha1 => {
                pbkdf2_hmac::<Sha1>(password.as_bytes(), salt.as_bytes(), iterations, &mut key);
            }
            Digest::Sha224 => {
                pbkdf2_hmac::<Sha224>(password.as_bytes(), salt.as_bytes(), iterations, &mut key);
            }
            Digest::Sha256 => {
                pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut key);
            }
            Digest::Sha384 => {
                pbkdf2_hmac::<Sha384>(password.as_bytes(), salt.as_bytes(), iterations, &mut key);
            }
            Digest::Sha512 => {
                pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), iterations, &mut key);
            }
        }
        key
    })
    .await
    .map_err(|e| HashError::internal(format!("derivation task dropped: {e}")))
}
