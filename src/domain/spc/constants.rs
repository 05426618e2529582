//! SPC-specific constants for Authenticode signing.

/// The fixed placeholder carried by `SpcString` in Authenticode signatures.
/// The format requires a string here but verifiers ignore its content.
pub const SPC_OBSOLETE_TEXT: &[u8] = b"<<<Obsolete>>>";

/// `SpcLink` wire discriminant for the `url` arm (CHOICE context tag [0]).
pub const SPC_LINK_TYPE_URL: u32 = 0;

/// `SpcLink` wire discriminant for the `file` arm (CHOICE context tag [2]).
pub const SPC_LINK_TYPE_FILE: u32 = 2;
