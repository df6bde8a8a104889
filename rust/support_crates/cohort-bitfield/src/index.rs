//! Position normalization.
//!
//! Any signed position is mapped into `[0, len)` by modulo arithmetic, which
//! makes position-based access total: `-1` addresses the last bit, `len`
//! addresses the first one.

use crate::word::Word;

/// Maps `pos` into `[0, len)`.
///
/// Returns `0` for an empty field; callers must not treat that as a real bit.
#[inline]
pub fn normalize(pos: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match isize::try_from(len) {
        Ok(len) => pos.rem_euclid(len) as usize,
        // A length beyond isize::MAX can't be addressed by a negative position
        // anyway; only the sign needs handling.
        Err(_) if pos >= 0 => pos as usize,
        Err(_) => len - pos.unsigned_abs(),
    }
}

/// Splits a normalized position into `(word_index, bit_offset)`.
#[inline]
pub fn split(pos: usize) -> (usize, u32) {
    (pos / Word::BITS, (pos % Word::BITS) as u32)
}

/// Normalizes `pos` against `len` and splits it into `(word_index, bit_offset)`.
#[inline]
pub fn locate(pos: isize, len: usize) -> (usize, u32) {
    split(normalize(pos, len))
}

/// Number of words needed to hold `len` bits; never less than one.
#[inline]
pub fn word_count(len: usize) -> usize {
    len.div_ceil(Word::BITS).max(1)
}

/// Clamps a signed length or count to a non-negative `usize`.
#[inline]
pub fn clamp_len(len: isize) -> usize {
    len.max(0) as usize
}
