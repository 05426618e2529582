//! Template-driven DER codec and the primitive encoders built on it.
//!
//! A [`DerTemplate`] describes how a raw value is wrapped into a
//! tag-length-value: either directly under a universal tag, or through a
//! sub-template with IMPLICIT or EXPLICIT context tagging. IMPLICIT replaces
//! the inner tag with the context tag; EXPLICIT re-wraps the whole inner TLV
//! in an additional outer TLV. Getting this distinction wrong is the classic
//! Authenticode interoperability bug, so it is modeled once, here.

pub mod oid;

pub use oid::{OidRegistry, OidTag, BUILTIN_OID_TAGS};

use crate::domain::constants::{
    ASN1_NULL, DER_LONG_FORM_1_BYTE, DER_LONG_FORM_2_BYTE, DER_LONG_FORM_3_BYTE, TAG_BMP_STRING,
    TAG_OBJECT_ID, TAG_OCTET_STRING, TAG_SEQUENCE,
};
use crate::infra::arena::{Arena, ArenaBuf};
use crate::infra::error::{CmsError, CmsResult};

/// How a template's context tag combines with its sub-template's encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tagging {
    /// Replace the inner tag with this template's tag.
    Implicit,
    /// Keep the inner TLV intact and wrap it in an outer TLV.
    Explicit,
}

/// One step of a DER encoding template.
///
/// `tagging` is only consulted when `sub` is present; leaf templates emit
/// `tag || length || value` directly.
pub struct DerTemplate {
    pub tag: u8,
    pub sub: Option<&'static DerTemplate>,
    pub tagging: Tagging,
}

/// OCTET STRING leaf template.
pub const OCTET_STRING_TEMPLATE: DerTemplate = DerTemplate {
    tag: TAG_OCTET_STRING,
    sub: None,
    tagging: Tagging::Implicit,
};

/// OBJECT IDENTIFIER leaf template.
pub const OBJECT_ID_TEMPLATE: DerTemplate = DerTemplate {
    tag: TAG_OBJECT_ID,
    sub: None,
    tagging: Tagging::Implicit,
};

/// BMPString leaf template (UCS-2 payload).
pub const BMP_STRING_TEMPLATE: DerTemplate = DerTemplate {
    tag: TAG_BMP_STRING,
    sub: None,
    tagging: Tagging::Implicit,
};

impl DerTemplate {
    /// Encode `value` through this template into a standalone DER TLV.
    #[must_use]
    pub fn apply(&self, value: &[u8]) -> Vec<u8> {
        match self.sub {
            None => der_tlv(self.tag, value),
            Some(sub) => {
                let inner = sub.apply(value);
                match self.tagging {
                    Tagging::Implicit => {
                        let mut out = inner;
                        out[0] = self.tag;
                        out
                    }
                    Tagging::Explicit => der_tlv(self.tag, &inner),
                }
            }
        }
    }
}

/// Append DER length octets for `len` (short form below 128, long form above).
pub fn push_der_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xff {
        out.push(DER_LONG_FORM_1_BYTE);
        out.push(len as u8);
    } else if len <= 0xffff {
        out.push(DER_LONG_FORM_2_BYTE);
        out.push((len >> 8) as u8);
        out.push((len & 0xff) as u8);
    } else {
        out.push(DER_LONG_FORM_3_BYTE);
        out.push((len >> 16) as u8);
        out.push((len >> 8) as u8);
        out.push((len & 0xff) as u8);
    }
}

/// Build a complete `tag || length || value` triple.
#[must_use]
pub fn der_tlv(tag: u8, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len() + 4);
    out.push(tag);
    push_der_length(&mut out, value.len());
    out.extend_from_slice(value);
    out
}

/// Encode `value` through `template`, allocating the result from `arena`.
pub fn encode_item(arena: &mut Arena, template: &DerTemplate, value: &[u8]) -> CmsResult<ArenaBuf> {
    arena.alloc_bytes(&template.apply(value))
}

/// Wrap `value` in a DER OCTET STRING TLV.
pub fn encode_octet_string(arena: &mut Arena, value: &[u8]) -> CmsResult<ArenaBuf> {
    encode_item(arena, &OCTET_STRING_TEMPLATE, value)
}

/// Emit the OBJECT IDENTIFIER TLV for a registered tag.
pub fn encode_object_id(arena: &mut Arena, oids: &OidRegistry, tag: OidTag) -> CmsResult<ArenaBuf> {
    let body = oids.find(tag).ok_or_else(|| {
        CmsError::Encoding(format!("object identifier {tag:?} is not registered"))
    })?;
    encode_item(arena, &OBJECT_ID_TEMPLATE, body)
}

/// Emit an AlgorithmIdentifier SEQUENCE for a registered tag.
///
/// Output is exactly `SEQUENCE { OBJECT IDENTIFIER, NULL }`: the parameters
/// field is always the fixed 2-byte DER NULL, never genuinely absent. Only
/// algorithms without real parameters are supported.
pub fn encode_algorithm_id(
    arena: &mut Arena,
    oids: &OidRegistry,
    tag: OidTag,
) -> CmsResult<ArenaBuf> {
    let body = oids.find(tag).ok_or_else(|| {
        CmsError::InvalidAlgorithm(format!(
            "{} ({tag:?}) has no registered object identifier",
            tag.dotted()
        ))
    })?;

    let mut inner = der_tlv(TAG_OBJECT_ID, body);
    inner.extend_from_slice(ASN1_NULL);
    arena.alloc_bytes(&der_tlv(TAG_SEQUENCE, &inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::{TAG_CONTEXT_0, TAG_CONTEXT_0_EXPLICIT};

    #[test]
    fn short_and_long_form_lengths() {
        let mut out = Vec::new();
        push_der_length(&mut out, 0x7f);
        assert_eq!(out, vec![0x7f]);

        out.clear();
        push_der_length(&mut out, 0x80);
        assert_eq!(out, vec![0x81, 0x80]);

        out.clear();
        push_der_length(&mut out, 0x1234);
        assert_eq!(out, vec![0x82, 0x12, 0x34]);

        out.clear();
        push_der_length(&mut out, 0x0001_0000);
        assert_eq!(out, vec![0x83, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn implicit_tagging_replaces_the_inner_tag() {
        static INNER: DerTemplate = BMP_STRING_TEMPLATE;
        let template = DerTemplate {
            tag: TAG_CONTEXT_0,
            sub: Some(&INNER),
            tagging: Tagging::Implicit,
        };
        let encoded = template.apply(&[0x00, 0x41]);
        // single TLV, context tag in place of the BMPString tag
        assert_eq!(encoded, vec![0x80, 0x02, 0x00, 0x41]);
    }

    #[test]
    fn explicit_tagging_adds_a_wrapper_layer() {
        static INNER: DerTemplate = BMP_STRING_TEMPLATE;
        let template = DerTemplate {
            tag: TAG_CONTEXT_0_EXPLICIT,
            sub: Some(&INNER),
            tagging: Tagging::Explicit,
        };
        let encoded = template.apply(&[0x00, 0x41]);
        // outer TLV carrying the intact inner BMPString TLV
        assert_eq!(encoded, vec![0xa0, 0x04, 0x1e, 0x02, 0x00, 0x41]);
    }
}
