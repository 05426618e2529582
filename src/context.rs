//! CMS operation context: process-wide library lifecycle, arena ownership,
//! and the certificate/key/digest material for one signing operation.

use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};

use x509_cert::Certificate;
use zeroize::{Zeroize, Zeroizing};

use crate::domain::asn1::{self, OidRegistry, OidTag};
use crate::domain::crypto::cert;
use crate::infra::arena::{Arena, ArenaBuf};
use crate::infra::config::CmsConfig;
use crate::infra::error::{CmsError, CmsResult};

/// Process-wide library slot. Only one context may hold it at a time.
static LIBRARY_ACTIVE: AtomicBool = AtomicBool::new(false);

/// RAII guard over the library slot: acquired during `initialize`, released
/// on drop so teardown-once is enforced structurally.
#[derive(Debug)]
struct LibraryGuard(());

impl LibraryGuard {
    fn acquire() -> CmsResult<Self> {
        if LIBRARY_ACTIVE
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(CmsError::Initialization(
                "cryptographic library is already initialized in this process".to_string(),
            ));
        }
        Ok(Self(()))
    }
}

impl Drop for LibraryGuard {
    fn drop(&mut self) {
        LIBRARY_ACTIVE.store(false, Ordering::SeqCst);
    }
}

/// Per-operation CMS context.
///
/// Either fully initialized (library slot held, OIDs registered, arena live)
/// or fully torn down; no partial state is observable. All DER output is
/// allocated from the context's arena and dies with it.
#[derive(Debug)]
pub struct CmsContext {
    guard: Option<LibraryGuard>,
    arena: Arena,
    oids: OidRegistry,
    certificate: Option<Certificate>,
    private_key: Option<Zeroizing<Vec<u8>>>,
    operation_digest: Option<Zeroizing<Vec<u8>>>,
    content_info_digest: Option<Zeroizing<Vec<u8>>>,
}

impl CmsContext {
    /// Initialize with default settings.
    pub fn initialize() -> CmsResult<Self> {
        Self::initialize_with_config(&CmsConfig::default())
    }

    /// Start the library, register the fixed OID set, and allocate the arena.
    ///
    /// Fails with `Initialization` if another context is live in this
    /// process. On any failure nothing is retained: the guard (if taken) is
    /// released on the error path.
    pub fn initialize_with_config(config: &CmsConfig) -> CmsResult<Self> {
        config.validate().map_err(|e| match e {
            CmsError::Configuration(msg) => CmsError::Initialization(msg),
            other => other,
        })?;

        let guard = LibraryGuard::acquire()?;
        let oids = OidRegistry::with_builtin();
        let arena = Arena::with_limits(config.arena_chunk_size, config.arena_capacity);

        log::debug!(
            "CMS context initialized ({} object identifiers registered)",
            oids.len()
        );

        Ok(Self {
            guard: Some(guard),
            arena,
            oids,
            certificate: None,
            private_key: None,
            operation_digest: None,
            content_info_digest: None,
        })
    }

    /// Whether the context currently holds the library slot.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.guard.is_some()
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    #[must_use]
    pub fn oids(&self) -> &OidRegistry {
        &self.oids
    }

    /// Read a certificate package from an open descriptor and install the
    /// leaf certificate.
    pub fn load_certificate<R: Read>(&mut self, reader: R) -> CmsResult<()> {
        let certificate = cert::read_cert(reader)?;
        log::info!("certificate loaded into CMS context");
        self.certificate = Some(certificate);
        Ok(())
    }

    pub fn set_certificate(&mut self, certificate: Certificate) {
        self.certificate = Some(certificate);
    }

    #[must_use]
    pub fn certificate(&self) -> Option<&Certificate> {
        self.certificate.as_ref()
    }

    /// Install raw private-key material. Wiped, never merely freed, at
    /// teardown.
    pub fn set_private_key(&mut self, der: Vec<u8>) {
        self.private_key = Some(Zeroizing::new(der));
    }

    #[must_use]
    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    pub fn set_operation_digest(&mut self, digest: Vec<u8>) {
        log::debug!("operation digest set: {}", hex::encode(&digest));
        self.operation_digest = Some(Zeroizing::new(digest));
    }

    #[must_use]
    pub fn operation_digest(&self) -> Option<&[u8]> {
        self.operation_digest.as_deref().map(Vec::as_slice)
    }

    pub fn set_content_info_digest(&mut self, digest: Vec<u8>) {
        log::debug!("content-info digest set: {}", hex::encode(&digest));
        self.content_info_digest = Some(Zeroizing::new(digest));
    }

    #[must_use]
    pub fn content_info_digest(&self) -> Option<&[u8]> {
        self.content_info_digest.as_deref().map(Vec::as_slice)
    }

    /// Wrap `value` in an OCTET STRING TLV allocated from this context's arena.
    pub fn encode_octet_string(&mut self, value: &[u8]) -> CmsResult<ArenaBuf> {
        self.ensure_active()?;
        asn1::encode_octet_string(&mut self.arena, value)
    }

    /// Emit the OBJECT IDENTIFIER TLV for a registered tag.
    pub fn encode_object_id(&mut self, tag: OidTag) -> CmsResult<ArenaBuf> {
        self.ensure_active()?;
        asn1::encode_object_id(&mut self.arena, &self.oids, tag)
    }

    /// Emit `SEQUENCE { OID, NULL }` for a registered algorithm tag.
    pub fn encode_algorithm_id(&mut self, tag: OidTag) -> CmsResult<ArenaBuf> {
        self.ensure_active()?;
        asn1::encode_algorithm_id(&mut self.arena, &self.oids, tag)
    }

    /// Resolve an encoded buffer handle against this context's arena.
    #[must_use]
    pub fn encoded(&self, buf: ArenaBuf) -> &[u8] {
        self.arena.bytes(buf)
    }

    /// Destroy the certificate, wipe and drop key/digest material, release
    /// the arena in one bulk operation, and give the library slot back.
    ///
    /// Idempotent: the second and later calls are no-ops. Also runs from
    /// `Drop`, so every exit path of the owning operation tears down.
    pub fn teardown(&mut self) {
        if self.guard.is_none() {
            return;
        }

        self.certificate = None;
        if let Some(mut key) = self.private_key.take() {
            key.zeroize();
        }
        if let Some(mut digest) = self.operation_digest.take() {
            digest.zeroize();
        }
        if let Some(mut digest) = self.content_info_digest.take() {
            digest.zeroize();
        }

        self.arena.release();
        self.guard = None;
        log::debug!("CMS context torn down");
    }

    fn ensure_active(&self) -> CmsResult<()> {
        if self.guard.is_none() {
            return Err(CmsError::Encoding(
                "context has been torn down".to_string(),
            ));
        }
        Ok(())
    }
}

impl Drop for CmsContext {
    fn drop(&mut self) {
        self.teardown();
    }
}
