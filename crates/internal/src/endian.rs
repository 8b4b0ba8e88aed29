//! Endianness utility functions
//!
//! SHA-1 is specified over big-endian words: message blocks are read as
//! big-endian `u32`s, the appended length is a big-endian `u64`, and the
//! digest bytes are the state words written big-endian in order.

/// Encode a message length given in bytes as the 64-bit big-endian bit count
/// appended during padding.
///
/// The count wraps modulo 2^64, matching the length field's width.
#[inline]
pub fn bit_length_be(byte_len: u64) -> [u8; 8] {
    byte_len.wrapping_mul(8).to_be_bytes()
}

/// Write `words` into `out` as consecutive big-endian 4-byte groups.
///
/// Only whole words that fit in `out` are written. Returns the number of
/// bytes written.
pub fn write_u32_be(words: &[u32], out: &mut [u8]) -> usize {
    let mut written = 0;
    for (word, chunk) in words.iter().zip(out.chunks_exact_mut(4)) {
        chunk.copy_from_slice(&word.to_be_bytes());
        written += 4;
    }
    written
}
