//! End-to-end checks of the public `sha1kit` surface

use sha1kit::prelude::*;
use sha1kit::{padded_len, OUTPUT_SIZE};

/// 64 bytes of `0x36` followed by `tail` bytes of `0x2E`
fn boundary_message(tail: usize) -> Vec<u8> {
    let mut msg = vec![0x36u8; 64];
    msg.resize(64 + tail, 0x2E);
    msg
}

#[test]
fn test_empty_input() {
    let digest = hash(b"");
    assert_eq!(digest.to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(digest.to_base64(), "2jmj7l5rSw0yVb/vlWAYkK/YBwk=");
    assert_eq!(digest.to_bytes().len(), OUTPUT_SIZE);
}

#[test]
fn test_quick_brown_fox() {
    let digest = hash("The quick brown fox jumps over the lazy dog");
    assert_eq!(digest.to_hex(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
    assert_eq!(digest.to_base64(), "L9ThxnotKPzthJ7hu3bnORuT6xI=");
}

#[test]
fn test_padding_boundary_regression() {
    let expected = [
        (310, "08afccd24bce328ae74661653ca103df02cba690"),
        (311, "bd8b2089549d57a05becbace5112c2c593b1af8b"),
        (312, "c6045cfc2468675660d3ff788225229c6b7ab422"),
    ];

    let digests: Vec<Digest> = expected
        .iter()
        .map(|(tail, hex)| {
            let msg = boundary_message(*tail);
            let digest = hash(&msg);
            assert_eq!(digest.to_hex(), *hex, "tail length {}", tail);
            digest
        })
        .collect();

    assert_ne!(digests[0], digests[1]);
    assert_ne!(digests[1], digests[2]);
    assert_ne!(digests[0], digests[2]);

    assert_eq!(padded_len(374) / 64, 6);
    assert_eq!(padded_len(375) / 64, 6);
    assert_eq!(padded_len(376) / 64, 7);
}

#[test]
fn test_many_blocks() {
    let data = vec![184u8; 200_000];
    assert_eq!(
        hash(&data).to_hex(),
        "707d33fe36b8bf5d21568058370ad9b70c5d1bfc"
    );
}

#[test]
fn test_byte_range() {
    let data: Vec<u8> = (0..=255).collect();
    assert_eq!(
        hash(&data).to_hex(),
        "4916d6bdb7f78e6803698cab32d1586ea457dfc8"
    );
}

#[test]
fn test_unicode_text_matches_explicit_bytes() {
    // "❤️ SHA" as UTF-8
    let explicit = [
        0xE2, 0x9D, 0xA4, 0xEF, 0xB8, 0x8F, 0x20, 0x53, 0x48, 0x41,
    ];
    assert_eq!(hash("❤️ SHA"), hash(explicit));
}

#[test]
fn test_streaming_from_reader() {
    let data = vec![184u8; 200_000];
    let mut hasher = Sha1::new();
    std::io::copy(&mut data.as_slice(), &mut hasher).unwrap();
    assert_eq!(hasher.finalize(), hash(&data));
}

#[test]
fn test_verify_hex_error_is_reported() {
    let err = hash(b"abc")
        .verify_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709")
        .unwrap_err();
    assert_eq!(err, Error::Verification { algorithm: "SHA-1" });
}
