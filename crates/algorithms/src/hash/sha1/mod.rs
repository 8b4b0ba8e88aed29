//! SHA-1 hash function
//!
//! This module implements the SHA-1 hash function as specified in FIPS 180-4.
//! Note: SHA-1 is considered cryptographically broken and should only be used
//! for compatibility with existing systems.
//!
//! The padded message is never materialised. Input is buffered into 64-byte
//! blocks as it arrives, and finalisation pushes the `0x80` marker, the zero
//! run and the big-endian bit count through the same buffer, so working
//! memory stays at one block regardless of input size.

use core::cmp;
use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use sha1kit_internal::endian::bit_length_be;
use zeroize::Zeroize;

use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

/// Size of one compression block in bytes
pub const BLOCK_SIZE: usize = 64;

/// Size of a SHA-1 digest in bytes
pub const OUTPUT_SIZE: usize = 20;

/// Initial hash values for SHA-1
const H0: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per group of twenty rounds
const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

static ZEROS: [u8; BLOCK_SIZE] = [0u8; BLOCK_SIZE];

/// SHA-1 algorithm marker type
pub enum Sha1Algorithm {}

impl HashAlgorithm for Sha1Algorithm {
    const OUTPUT_SIZE: usize = OUTPUT_SIZE;
    const BLOCK_SIZE: usize = BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-1";
}

/// Number of zero bytes between the `0x80` marker and the length field for
/// a message of `len` bytes.
///
/// This is `(55 - len) mod 64`, so that the marker, the zeros and the
/// 8-byte length field end exactly on a block boundary.
pub fn zero_padding_len(len: u64) -> usize {
    // 2^64 is a multiple of 64, so the wrapped difference has the right residue.
    (55u64.wrapping_sub(len) % BLOCK_SIZE as u64) as usize
}

/// Length in bytes of the padded message for a `len`-byte input.
///
/// Always a positive multiple of [`BLOCK_SIZE`].
pub fn padded_len(len: u64) -> u64 {
    len.wrapping_add(1 + zero_padding_len(len) as u64 + 8)
}

/// SHA-1 hash function
#[derive(Clone, Zeroize)]
pub struct Sha1 {
    /// Current hash state
    h: [u32; 5],
    /// Message buffer
    buffer: [u8; BLOCK_SIZE],
    /// Bytes in buffer
    buffer_len: usize,
    /// Total message length in bytes
    total_len: u64,
}

impl Sha1 {
    /// Creates a new SHA-1 hasher
    pub fn new() -> Self {
        Self {
            h: H0,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Hashes `data` in one call.
    ///
    /// Text is hashed as its UTF-8 encoding.
    pub fn hash(data: impl AsRef<[u8]>) -> Digest {
        let mut hasher = Self::new();
        hasher.update_internal(data.as_ref());
        hasher.finalize_internal()
    }

    /// Number of message bytes absorbed so far
    pub fn len(&self) -> u64 {
        self.total_len
    }

    /// Whether no message bytes have been absorbed yet
    pub fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    /// Feeds bytes through the block buffer without counting them as message
    /// length. Used for both message bytes and padding.
    fn absorb(&mut self, mut data: &[u8]) {
        if self.buffer_len > 0 {
            let take = cmp::min(BLOCK_SIZE - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_SIZE {
                return;
            }
            compress(&mut self.h, &self.buffer);
            self.buffer_len = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            compress(&mut self.h, block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    fn update_internal(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);
        self.absorb(data);
    }

    fn finalize_internal(&mut self) -> Digest {
        let len = self.total_len;
        self.absorb(&[0x80]);
        self.absorb(&ZEROS[..zero_padding_len(len)]);
        self.absorb(&bit_length_be(len));
        debug_assert_eq!(self.buffer_len, 0);

        self.buffer.zeroize();
        Digest::from_state(self.h)
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha1")
            .field("len", &self.total_len)
            .finish_non_exhaustive()
    }
}

impl HashFunction for Sha1 {
    type Algorithm = Sha1Algorithm;
    type Output = Digest;

    fn new() -> Self {
        Sha1::new()
    }

    fn update(&mut self, data: &[u8]) -> &mut Self {
        self.update_internal(data);
        self
    }

    fn finalize(mut self) -> Self::Output {
        self.finalize_internal()
    }

    fn finalize_reset(&mut self) -> Self::Output {
        let digest = self.finalize_internal();
        self.reset();
        digest
    }

    fn reset(&mut self) {
        *self = Sha1::new();
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Sha1 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update_internal(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[inline(always)]
fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

#[inline(always)]
fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

/// Folds one 64-byte block into the running state.
fn compress(state: &mut [u32; 5], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_SIZE);

    // Prepare the message schedule
    let mut w = [0u32; 80];
    BigEndian::read_u32_into(block, &mut w[..16]);
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &wi) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => (ch(b, c, d), K[0]),
            20..=39 => (parity(b, c, d), K[1]),
            40..=59 => (maj(b, c, d), K[2]),
            _ => (parity(b, c, d), K[3]),
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(wi);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (h, v) in state.iter_mut().zip([a, b, c, d, e]) {
        *h = h.wrapping_add(v);
    }

    w.zeroize();
}
