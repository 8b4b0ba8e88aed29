//! Value types produced by the hash functions

pub mod digest;

pub use digest::Digest;
