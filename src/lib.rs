//! # sha1kit
//!
//! A pure Rust SHA-1 implementation with several renderings of the digest.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sha1kit = "0.3"
//! ```
//!
//! ```
//! let digest = sha1kit::hash(b"The quick brown fox jumps over the lazy dog");
//! assert_eq!(digest.to_hex(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
//! assert_eq!(digest.to_base64(), "L9ThxnotKPzthJ7hu3bnORuT6xI=");
//! assert_eq!(digest.to_bytes().len(), 20);
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::io::Write` for the hasher and `std::error::Error` for errors
//! - `alloc`: String-returning formatters without the standard library
//! - `serde`: serialize a [`Digest`] as its hexadecimal string
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`sha1kit-algorithms`]: the SHA-1 engine, the `Digest` type and its formatters
//! - [`sha1kit-internal`]: byte-order and constant-time helpers

#![cfg_attr(not(feature = "std"), no_std)]

pub use sha1kit_algorithms as algorithms;
pub use sha1kit_internal as internal;

pub use sha1kit_algorithms::hash::sha1::{
    padded_len, zero_padding_len, Sha1, Sha1Algorithm, BLOCK_SIZE, OUTPUT_SIZE,
};
pub use sha1kit_algorithms::hash::{HashAlgorithm, HashFunction};
pub use sha1kit_algorithms::types::Digest;
pub use sha1kit_algorithms::{Error, Result};

/// Computes the SHA-1 digest of `data`.
///
/// Accepts anything that views as bytes, so UTF-8 text can be passed as a
/// `&str` directly.
pub fn hash(data: impl AsRef<[u8]>) -> Digest {
    Sha1::hash(data)
}

/// Common imports for sha1kit users
pub mod prelude {
    pub use crate::{hash, Digest, Error, HashFunction, Result, Sha1};
}
