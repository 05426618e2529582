//! Crypto domain types: certificate loading and digest algorithm selection.

pub mod cert;

pub use cert::{decode_cert_package, read_cert, read_cert_chain};

use std::fmt;
use std::str::FromStr;

use crate::domain::asn1::OidTag;
use crate::infra::error::{CmsError, CmsResult};

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }

    #[must_use]
    pub fn digest_size(&self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }

    /// The registry tag carrying this algorithm's object identifier.
    #[must_use]
    pub fn oid_tag(&self) -> OidTag {
        match self {
            DigestAlgorithm::Sha1 => OidTag::Sha1,
            DigestAlgorithm::Sha256 => OidTag::Sha256,
            DigestAlgorithm::Sha384 => OidTag::Sha384,
            DigestAlgorithm::Sha512 => OidTag::Sha512,
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CmsError;

    fn from_str(s: &str) -> CmsResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "sha384" => Ok(DigestAlgorithm::Sha384),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            other => Err(CmsError::InvalidAlgorithm(format!(
                "unsupported digest algorithm: {other}"
            ))),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
