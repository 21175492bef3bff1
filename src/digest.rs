//! Digest algorithm names accepted by the PBKDF2 primitive

use std::fmt;
use std::str::FromStr;

use crate::error::HashError;

/// Hash functions usable as the PBKDF2 pseudorandom function.
///
/// Names are the lowercase identifiers that appear in the record wire
/// format (`sha1`, `sha256`, ...). Parsing is strict: an unrecognized or
/// differently-cased name fails with [`HashError::UnsupportedDigest`] so a
/// record always re-encodes to exactly the string it was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digest {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Digest {
    /// Wire-format name of this digest
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }
}

impl FromStr for Digest {
    type Err = HashError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            other => Err(HashError::UnsupportedDigest(other.to_string())),
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
