//! SHA-1 digest value and its external representations
//!
//! A [`Digest`] holds the five state words left after the last block. It can
//! only be obtained by finishing a hash computation, and renders on demand
//! as lowercase hexadecimal, standard base64, or 20 raw bytes.

use core::fmt;

#[cfg(feature = "alloc")]
use alloc::string::String;

#[cfg(feature = "alloc")]
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha1kit_internal::{constant_time, endian};

use crate::error::{validate, Result};
use crate::hash::sha1::OUTPUT_SIZE;

/// Number of 32-bit words in a SHA-1 digest
const WORDS: usize = 5;

/// A finished SHA-1 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    words: [u32; WORDS],
}

impl Digest {
    /// Wraps a final hash state.
    pub(crate) fn from_state(words: [u32; WORDS]) -> Self {
        Self { words }
    }

    /// The five state words `h0..h4`
    pub fn words(&self) -> [u32; WORDS] {
        self.words
    }

    /// The digest as 20 bytes, each word big-endian in order `h0..h4`
    pub fn to_bytes(&self) -> [u8; OUTPUT_SIZE] {
        let mut out = [0u8; OUTPUT_SIZE];
        endian::write_u32_be(&self.words, &mut out);
        out
    }

    /// 40 lowercase hexadecimal characters
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Standard base64 with padding: 28 characters ending in one `=`
    #[cfg(feature = "alloc")]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Compare two digests in constant time
    pub fn ct_eq(&self, other: &Self) -> bool {
        constant_time::ct_eq_words(&self.words, &other.words)
    }

    /// Check this digest against an expected hexadecimal rendering.
    ///
    /// Upper- and lowercase hex are both accepted. The comparison runs in
    /// constant time over the decoded bytes.
    pub fn verify_hex(&self, expected: &str) -> Result<()> {
        validate::length("expected digest", expected.len(), 2 * OUTPUT_SIZE)?;

        let mut bytes = [0u8; OUTPUT_SIZE];
        let decoded = hex::decode_to_slice(expected, &mut bytes).is_ok();
        validate::parameter(decoded, "expected", "invalid hexadecimal string")?;

        validate::verification(constant_time::ct_eq(self.to_bytes(), bytes), "SHA-1")
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{:08X}", word)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:x})", self)
    }
}

impl From<Digest> for [u8; OUTPUT_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.to_bytes()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
