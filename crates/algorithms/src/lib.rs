//! SHA-1 message digests
//!
//! This crate provides the SHA-1 compression engine and the [`Digest`] value
//! it produces, with hexadecimal, base64 and raw byte renderings. Hashing is
//! a total function: every finite byte sequence, including the empty one,
//! yields exactly one digest and no operation here can fail or panic on
//! caller input.
//!
//! The library is usable in both `std` and `no_std` environments. The
//! String-returning formatters need the `alloc` feature.
//!
//! ```
//! use sha1kit_algorithms::{HashFunction, Sha1};
//!
//! let mut hasher = Sha1::new();
//! hasher.update(b"The quick brown fox ");
//! hasher.update(b"jumps over the lazy dog");
//! let digest = hasher.finalize();
//!
//! assert_eq!(digest, Sha1::hash(b"The quick brown fox jumps over the lazy dog"));
//! assert_eq!(digest.to_hex(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashAlgorithm, HashFunction, Sha1, Sha1Algorithm};

// Type system
pub mod types;
pub use types::Digest;
