//! Internal utilities for the sha1kit library
//!
//! Byte-order conversion for the engine's 32-bit and 64-bit words and the
//! constant-time comparison used when checking digests.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::ct_eq;
