//! Centralized constants for commonly repeated DER/OID bytes and tags.
//! Keep this intentionally small; only broadly reused literals should live here.

// === ASN.1 DER Constants ===

/// ASN.1 NULL value (tag + zero length), the fixed AlgorithmIdentifier parameters
pub const ASN1_NULL: &[u8] = &[0x05, 0x00];

/// ASN.1 SEQUENCE tag (constructed)
pub const TAG_SEQUENCE: u8 = 0x30;

/// ASN.1 OCTET STRING tag
pub const TAG_OCTET_STRING: u8 = 0x04;

/// ASN.1 OBJECT IDENTIFIER tag
pub const TAG_OBJECT_ID: u8 = 0x06;

/// ASN.1 BMPString tag (UCS-2, 2 bytes per unit)
pub const TAG_BMP_STRING: u8 = 0x1e;

/// Context-specific tag [0], primitive (IMPLICIT over a primitive type)
pub const TAG_CONTEXT_0: u8 = 0x80;

/// Context-specific tag [0], constructed (EXPLICIT wrapper)
pub const TAG_CONTEXT_0_EXPLICIT: u8 = 0xa0;

/// Context-specific tag [2], constructed
pub const TAG_CONTEXT_2_CONSTRUCTED: u8 = 0xa2;

/// DER long form length encoding: 1-byte length follows
pub const DER_LONG_FORM_1_BYTE: u8 = 0x81;

/// DER long form length encoding: 2-byte length follows
pub const DER_LONG_FORM_2_BYTE: u8 = 0x82;

/// DER long form length encoding: 3-byte length follows
pub const DER_LONG_FORM_3_BYTE: u8 = 0x83;

// === Hash Algorithm OID bodies (content octets, without tag/length) ===

/// SHA-1 OID (1.3.14.3.2.26)
pub const OID_SHA1: &[u8] = &[0x2b, 0x0e, 0x03, 0x02, 0x1a];

/// SHA-256 OID (2.16.840.1.101.3.4.2.1)
pub const OID_SHA256: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01];

/// SHA-384 OID (2.16.840.1.101.3.4.2.2)
pub const OID_SHA384: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02];

/// SHA-512 OID (2.16.840.1.101.3.4.2.3)
pub const OID_SHA512: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03];

// === Microsoft Authenticode OID bodies ===

/// SPC indirect data OID (1.3.6.1.4.1.311.2.1.4)
pub const OID_SPC_INDIRECT_DATA: &[u8] =
    &[0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x01, 0x04];

/// SPC statement type OID (1.3.6.1.4.1.311.2.1.11)
pub const OID_SPC_STATEMENT_TYPE: &[u8] =
    &[0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x01, 0x0b];

/// SPC SP opus info OID (1.3.6.1.4.1.311.2.1.12)
pub const OID_SPC_SP_OPUS_INFO: &[u8] =
    &[0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x01, 0x0c];

/// SPC PE image data OID (1.3.6.1.4.1.311.2.1.15)
pub const OID_SPC_PE_IMAGE_DATA: &[u8] =
    &[0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x01, 0x0f];

/// Microsoft individual code signing OID (1.3.6.1.4.1.311.2.1.21)
pub const OID_MS_INDIVIDUAL_CODE_SIGNING: &[u8] =
    &[0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x01, 0x15];
