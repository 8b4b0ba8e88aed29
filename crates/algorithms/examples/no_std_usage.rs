// This example demonstrates how the engine can be used in a no_std environment
// even though it's being compiled with std available for testing purposes
#![cfg_attr(not(feature = "std"), no_std)]

use sha1kit_algorithms::hash::sha1::{padded_len, OUTPUT_SIZE};
use sha1kit_algorithms::{Digest, HashFunction, Sha1};

#[cfg(feature = "std")]
use sha1kit_algorithms::Error;

// One-shot hashing only needs the raw byte rendering, which never allocates.
fn oneshot_example() -> [u8; OUTPUT_SIZE] {
    Sha1::hash(b"Hello, no_std world!").to_bytes()
}

// Streaming input in pieces, e.g. from a fixed-size receive buffer.
fn streaming_example() -> Digest {
    let mut hasher = Sha1::new();
    for piece in [&b"Hello, "[..], &b"no_std "[..], &b"world!"[..]] {
        hasher.update(piece);
    }
    hasher.finalize()
}

#[cfg(feature = "std")]
fn verify_example(digest: &Digest) -> Result<(), Error> {
    digest.verify_hex("28dc0474a8b02a02ea955d489e1844a2f9fea1b3")
}

fn main() {
    let oneshot = oneshot_example();
    let streamed = streaming_example();
    assert_eq!(oneshot, streamed.to_bytes());

    // A 20-byte message still fits in one padded block.
    assert_eq!(padded_len(20), 64);

    #[cfg(feature = "std")]
    {
        println!("SHA-1 digest: {}", streamed);
        match verify_example(&streamed) {
            Ok(()) => println!("Digest matches the expected value"),
            Err(e) => println!("Digest check: {}", e),
        }
    }
}
