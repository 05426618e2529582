//! Object identifier registry.
//!
//! The encoders only ever emit a fixed set of identifiers, registered once at
//! context initialization. Lookups go through [`OidRegistry`] so an
//! unregistered tag is a reportable error instead of a silent mis-encoding.

use std::collections::HashMap;

use crate::domain::constants::{
    OID_MS_INDIVIDUAL_CODE_SIGNING, OID_SHA1, OID_SHA256, OID_SHA384, OID_SHA512,
    OID_SPC_INDIRECT_DATA, OID_SPC_PE_IMAGE_DATA, OID_SPC_SP_OPUS_INFO, OID_SPC_STATEMENT_TYPE,
};

/// Object identifier tags understood by the encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OidTag {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    SpcIndirectDataContent,
    SpcStatementType,
    SpcSpOpusInfo,
    SpcPeImageData,
    MsIndividualCodeSigning,
}

impl OidTag {
    /// Dotted-decimal form, for diagnostics only.
    #[must_use]
    pub fn dotted(&self) -> &'static str {
        match self {
            OidTag::Sha1 => "1.3.14.3.2.26",
            OidTag::Sha256 => "2.16.840.1.101.3.4.2.1",
            OidTag::Sha384 => "2.16.840.1.101.3.4.2.2",
            OidTag::Sha512 => "2.16.840.1.101.3.4.2.3",
            OidTag::SpcIndirectDataContent => "1.3.6.1.4.1.311.2.1.4",
            OidTag::SpcStatementType => "1.3.6.1.4.1.311.2.1.11",
            OidTag::SpcSpOpusInfo => "1.3.6.1.4.1.311.2.1.12",
            OidTag::SpcPeImageData => "1.3.6.1.4.1.311.2.1.15",
            OidTag::MsIndividualCodeSigning => "1.3.6.1.4.1.311.2.1.21",
        }
    }
}

/// Tag-to-OID-body lookup table. Bodies are DER content octets without the
/// tag/length header.
#[derive(Debug)]
pub struct OidRegistry {
    entries: HashMap<OidTag, &'static [u8]>,
}

/// Every tag the encoders rely on, in registration order.
pub const BUILTIN_OID_TAGS: &[OidTag] = &[
    OidTag::Sha1,
    OidTag::Sha256,
    OidTag::Sha384,
    OidTag::Sha512,
    OidTag::SpcIndirectDataContent,
    OidTag::SpcStatementType,
    OidTag::SpcSpOpusInfo,
    OidTag::SpcPeImageData,
    OidTag::MsIndividualCodeSigning,
];

impl OidRegistry {
    /// Registry with nothing registered. Useful for exercising lookup failure.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry pre-populated with the fixed set the encoders rely on.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(OidTag::Sha1, OID_SHA1);
        registry.register(OidTag::Sha256, OID_SHA256);
        registry.register(OidTag::Sha384, OID_SHA384);
        registry.register(OidTag::Sha512, OID_SHA512);
        registry.register(OidTag::SpcIndirectDataContent, OID_SPC_INDIRECT_DATA);
        registry.register(OidTag::SpcStatementType, OID_SPC_STATEMENT_TYPE);
        registry.register(OidTag::SpcSpOpusInfo, OID_SPC_SP_OPUS_INFO);
        registry.register(OidTag::SpcPeImageData, OID_SPC_PE_IMAGE_DATA);
        registry.register(OidTag::MsIndividualCodeSigning, OID_MS_INDIVIDUAL_CODE_SIGNING);
        registry
    }

    pub fn register(&mut self, tag: OidTag, body: &'static [u8]) {
        self.entries.insert(tag, body);
    }

    #[must_use]
    pub fn find(&self, tag: OidTag) -> Option<&'static [u8]> {
        self.entries.get(&tag).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
