//! Self-describing hash record codec
//!
//! A record carries the derived key together with every parameter needed to
//! re-derive it: `key:salt:iterations:length:digest`, joined with a
//! configurable separator. Encoding does not inspect fields for the
//! separator; callers must keep salt and digest separator-free or decoding
//! will misparse.

use crate::error::{HashError, Result};

/// Separator between record fields unless the caller picks another
pub const DEFAULT_SEPARATOR: &str = ":";

const FIELD_COUNT: usize = 5;

/// Decoded form of a serialized hash record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRecord {
    /// Derived key, lowercase hex, `2 * length` characters
    pub key_hex: String,
    /// Salt exactly as it was fed to the derivation
    pub salt: String,
    /// PBKDF2 work factor
    pub iterations: u32,
    /// Derived key length in bytes
    pub length: usize,
    /// Digest name, e.g. `sha512`
    pub digest: String,
}

impl HashRecord {
    /// Join the five fields in wire order with `separator`
    #[must_use]
    pub fn encode(&self, separator: &str) -> String {
        [
            self.key_hex.as_str(),
            self.salt.as_str(),
            &self.iterations.to_string(),
            &self.length.to_string(),
            &self.digest,
        ]
        .join(separator)
    }

    /// Split `record` on `separator` into exactly five fields.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::MalformedRecord`] when the split does not yield
    /// five parts, or when `iterations`/`length` are not plain base-10
    /// integers (`"10.5"`, `"1e4"`, `"+10"` are rejected, never truncated).
    pub fn decode(record: &str, separator: &str) -> Result<Self> {
        let fields: Vec<&str> = record.split(separator).collect();
        let [key_hex, salt, iterations, length, digest] = fields[..] else {
            return Err(HashError::malformed(format!(
                "expected {FIELD_COUNT} fields, found {}",
                fields.len()
            )));
        };
        Ok(Self {
            key_hex: key_hex.to_string(),
            salt: salt.to_string(),
            iterations: parse_exact_int(iterations, "iterations")?,
            length: parse_exact_int(length, "length")?,
            digest: digest.to_string(),
        })
    }
}

/// Parse a base-10 integer literal: ASCII digits only, no sign, no decimal
/// point, no exponent. Overflow of the target type is malformed too.
fn parse_exact_int<T: std::str::FromStr>(field: &str, what: &str) -> Result<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HashError::malformed(format!(
            "{what} is not a base-10 integer: {field:?}"
        )));
    }
    field
        .parse()
        .map_err(|_| HashError::malformed(format!("{what} is out of range: {field:?}")))
}
