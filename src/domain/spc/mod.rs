//! Authenticode `SpcString` and `SpcLink` encoders.
//!
//! `SpcString` must decode as a context-[0] TLV carrying raw UCS-2:
//!
//! ```text
//! [0]  (28)
//!    00 3c 00 3c 00 3c 00 4f 00 62 00 73 00 6f 00
//!    6c 00 65 00 74 00 65 00 3e 00 3e 00 3e
//! ```
//!
//! `SpcLink` is a CHOICE: `url [0] EXPLICIT` over raw bytes, or
//! `file [2]` constructed around an `SpcString`.

pub mod constants;

pub use constants::{SPC_LINK_TYPE_FILE, SPC_LINK_TYPE_URL, SPC_OBSOLETE_TEXT};

use crate::domain::asn1::{der_tlv, DerTemplate, Tagging, BMP_STRING_TEMPLATE};
use crate::domain::constants::{TAG_CONTEXT_0, TAG_CONTEXT_0_EXPLICIT, TAG_CONTEXT_2_CONSTRUCTED};
use crate::infra::arena::{Arena, ArenaBuf};
use crate::infra::error::{CmsError, CmsResult};

/// `SpcString` template: a BMPString IMPLICITLY tagged [0] (primitive).
pub const SPC_STRING_TEMPLATE: DerTemplate = DerTemplate {
    tag: TAG_CONTEXT_0,
    sub: Some(&BMP_STRING_TEMPLATE),
    tagging: Tagging::Implicit,
};

/// Encode an `SpcString`, widening each input byte to one big-endian UCS-2
/// unit. This matches the fixed placeholder use case, not general Unicode
/// transcoding.
pub fn encode_spc_string(arena: &mut Arena, text: &[u8]) -> CmsResult<ArenaBuf> {
    let der = spc_string_der(arena, text)?;
    arena.alloc_bytes(&der)
}

fn spc_string_der(arena: &mut Arena, text: &[u8]) -> CmsResult<Vec<u8>> {
    let mut units = Vec::with_capacity(text.len() * 2);
    for &byte in text {
        units.push(0x00);
        units.push(byte);
    }
    // the unit buffer lives in the arena like every byte string produced here
    let payload = arena.alloc_bytes(&units)?;
    Ok(SPC_STRING_TEMPLATE.apply(arena.bytes(payload)))
}

/// `SpcLink` CHOICE, carrying exactly one arm by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpcLink<'a> {
    /// Raw URL bytes, emitted unchanged under an EXPLICIT [0] wrapper.
    Url(&'a [u8]),
    /// File name text, emitted as an `SpcString` under a constructed [2].
    File(&'a [u8]),
}

impl<'a> SpcLink<'a> {
    /// Map a wire discriminant to a link arm. Anything outside
    /// {[`SPC_LINK_TYPE_URL`], [`SPC_LINK_TYPE_FILE`]} is rejected before any
    /// allocation happens.
    pub fn from_raw(kind: u32, payload: &'a [u8]) -> CmsResult<Self> {
        match kind {
            SPC_LINK_TYPE_URL => Ok(SpcLink::Url(payload)),
            SPC_LINK_TYPE_FILE => Ok(SpcLink::File(payload)),
            other => Err(CmsError::InvalidDiscriminant(format!(
                "unknown SpcLink type {other}"
            ))),
        }
    }

    /// Encode this link as a single DER value allocated from `arena`.
    pub fn encode(&self, arena: &mut Arena) -> CmsResult<ArenaBuf> {
        match *self {
            SpcLink::Url(bytes) => arena.alloc_bytes(&der_tlv(TAG_CONTEXT_0_EXPLICIT, bytes)),
            SpcLink::File(text) => {
                let inner = spc_string_der(arena, text)?;
                arena.alloc_bytes(&der_tlv(TAG_CONTEXT_2_CONSTRUCTED, &inner))
            }
        }
    }
}

/// Discriminant-driven entry point mirroring the raw wire interface.
pub fn encode_spc_link(arena: &mut Arena, kind: u32, payload: &[u8]) -> CmsResult<ArenaBuf> {
    SpcLink::from_raw(kind, payload)?.encode(arena)
}
