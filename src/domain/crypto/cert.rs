//! Certificate package loading.
//!
//! A package is either a raw DER certificate or one-or-more concatenated PEM
//! blocks, as produced by ordinary CA tooling:
//!
//! ```text
//! $ openssl genrsa -out privkey.pem 2048
//! $ openssl req -new -x509 -key privkey.pem -out cacert.pem -days 1095
//! ```

use std::io::Read;

use der::Decode;
use x509_cert::Certificate;

use crate::infra::error::{CmsError, CmsResult};

const PEM_MARKER: &[u8] = b"-----BEGIN";

/// Read an entire certificate package from an open descriptor and decode the
/// leaf certificate. Ownership of the certificate transfers to the caller.
pub fn read_cert<R: Read>(mut reader: R) -> CmsResult<Certificate> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|e| CmsError::Decode(format!("failed to read certificate package: {e}")))?;
    decode_cert_package(&raw)
}

/// Read a package and decode every certificate it contains, leaf first.
pub fn read_cert_chain<R: Read>(mut reader: R) -> CmsResult<Vec<Certificate>> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|e| CmsError::Decode(format!("failed to read certificate package: {e}")))?;
    decode_chain(&raw)
}

/// Decode a certificate package already held in memory.
pub fn decode_cert_package(raw: &[u8]) -> CmsResult<Certificate> {
    let mut chain = decode_chain(raw)?;
    if chain.is_empty() {
        return Err(CmsError::Decode(
            "certificate package contains no certificates".to_string(),
        ));
    }
    Ok(chain.remove(0))
}

fn decode_chain(raw: &[u8]) -> CmsResult<Vec<Certificate>> {
    if raw.is_empty() {
        return Err(CmsError::Decode("certificate package is empty".to_string()));
    }

    if is_pem(raw) {
        Certificate::load_pem_chain(raw)
            .map_err(|e| CmsError::Decode(format!("malformed PEM certificate package: {e}")))
    } else {
        let cert = Certificate::from_der(raw)
            .map_err(|e| CmsError::Decode(format!("malformed DER certificate: {e}")))?;
        Ok(vec![cert])
    }
}

fn is_pem(raw: &[u8]) -> bool {
    raw.windows(PEM_MARKER.len()).any(|w| w == PEM_MARKER)
}
