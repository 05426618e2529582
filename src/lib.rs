//! Authenticode CMS Scaffolding
//!
//! Builds the cryptographic-message-syntax structures that accompany an
//! Authenticode-style code-signing signature: object identifiers, algorithm
//! identifiers, and the `SpcString`/`SpcLink` pair, all as bit-exact DER.
//! A [`CmsContext`] owns the process-wide library lifecycle and the arena
//! every encoded buffer is allocated from.
//!
//! Reading binaries, hashing, signing, and assembling the outer `SignedData`
//! belong to the driver layer; this crate only prepares and encodes the
//! metadata around that work.

pub mod context;
pub mod domain;
pub mod infra;

pub use context::CmsContext;
pub use domain::asn1::{
    encode_algorithm_id, encode_item, encode_object_id, encode_octet_string, DerTemplate,
    OidRegistry, OidTag, Tagging, BUILTIN_OID_TAGS,
};
pub use domain::crypto::{decode_cert_package, read_cert, read_cert_chain, DigestAlgorithm};
pub use domain::spc::{
    encode_spc_link, encode_spc_string, SpcLink, SPC_LINK_TYPE_FILE, SPC_LINK_TYPE_URL,
    SPC_OBSOLETE_TEXT,
};
pub use infra::arena::{Arena, ArenaBuf};
pub use infra::config::CmsConfig;
pub use infra::error::{CmsError, CmsResult};
