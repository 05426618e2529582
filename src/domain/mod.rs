pub mod asn1;
pub mod constants;
pub mod crypto;
pub mod spc;
