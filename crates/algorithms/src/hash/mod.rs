//! Hash function implementations
//!
//! This module contains the SHA-1 engine and the traits it is driven
//! through. Hashing is a total function over byte sequences, so none of the
//! trait methods return a `Result`.

pub mod sha1;

// Re-exports
pub use sha1::{Sha1, Sha1Algorithm};

/// Static description of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Compression block size in bytes
    const BLOCK_SIZE: usize;

    /// Human readable algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Trait for incremental hash functions
pub trait HashFunction: Sized {
    /// Algorithm marker describing sizes and name
    type Algorithm: HashAlgorithm;

    /// Finished digest type
    type Output;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> &mut Self;

    /// Completes the computation and returns the digest
    fn finalize(self) -> Self::Output;

    /// Completes the computation and resets the hasher for reuse
    fn finalize_reset(&mut self) -> Self::Output;

    /// Discards all absorbed input
    fn reset(&mut self);

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the hash function
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Self::Output {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}
