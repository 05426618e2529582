//! Tests for the certificate package loader.

use std::io::{self, Cursor, Read};
use std::path::Path;

use authenticode_cms::{decode_cert_package, read_cert, read_cert_chain, CmsError};

#[test]
fn garbage_der_is_rejected() {
    let err = decode_cert_package(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
    assert!(matches!(err, CmsError::Decode(_)));
}

#[test]
fn empty_package_is_rejected() {
    let err = decode_cert_package(&[]).unwrap_err();
    assert!(matches!(err, CmsError::Decode(_)));
}

#[test]
fn malformed_pem_is_rejected() {
    let pem = b"-----BEGIN CERTIFICATE-----\nnot base64 at all!!!\n-----END CERTIFICATE-----\n";
    let err = decode_cert_package(pem).unwrap_err();
    assert!(matches!(err, CmsError::Decode(_)));
}

#[test]
fn truncated_der_sequence_is_rejected() {
    // plausible SEQUENCE header, no body
    let err = decode_cert_package(&[0x30, 0x82, 0x04, 0x00]).unwrap_err();
    assert!(matches!(err, CmsError::Decode(_)));
}

#[test]
fn read_cert_consumes_the_descriptor() {
    let err = read_cert(Cursor::new(vec![0x01, 0x02, 0x03])).unwrap_err();
    assert!(matches!(err, CmsError::Decode(_)));
}

#[test]
fn read_failure_surfaces_as_decode_error() {
    struct FailingReader;
    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "descriptor gone"))
        }
    }

    let err = read_cert(FailingReader).unwrap_err();
    match err {
        CmsError::Decode(msg) => assert!(msg.contains("descriptor gone")),
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[test]
fn chain_of_garbage_is_rejected() {
    let err = read_cert_chain(Cursor::new(b"-----BEGIN CERTIFICATE-----\n!\n".to_vec()))
        .unwrap_err();
    assert!(matches!(err, CmsError::Decode(_)));
}

#[test]
#[ignore = "requires a deterministic certificate fixture at reference/cert.pem"]
fn pem_package_yields_the_leaf_certificate() {
    let pem_path = Path::new("reference").join("cert.pem");
    let pem = std::fs::read(&pem_path).expect("read cert.pem");
    let cert = decode_cert_package(&pem).expect("parse pem package");
    let chain = read_cert_chain(Cursor::new(pem)).expect("parse pem chain");
    assert_eq!(
        chain[0].tbs_certificate.serial_number,
        cert.tbs_certificate.serial_number
    );
}
