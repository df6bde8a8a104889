//! A single 64-bit storage block.

use std::{fmt, ops::Not};

/// A fixed-width 64-bit bit container, the storage granularity of a
/// [`BitField`](crate::BitField).
///
/// Bit `0` is the least significant bit of the underlying `u64`. All operations
/// are pure and return a new `Word`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Word(u64);

impl Word {
    /// Number of bits held by a single word.
    pub const BITS: usize = u64::BITS as usize;

    pub const ZERO: Word = Word(0);
    pub const ONES: Word = Word(u64::MAX);

    #[inline]
    pub const fn new(bits: u64) -> Word {
        Word(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns a word with only the lowest `count` bits set. `count` values of
    /// 64 and above yield [`Word::ONES`].
    #[inline]
    pub const fn low_mask(count: usize) -> Word {
        if count >= Self::BITS {
            Word::ONES
        } else {
            Word((1u64 << count) - 1)
        }
    }

    #[inline]
    #[must_use]
    pub const fn set(self, offset: u32) -> Word {
        debug_assert!(offset < u64::BITS);
        Word(self.0 | (1u64 << offset))
    }

    #[inline]
    #[must_use]
    pub const fn clear(self, offset: u32) -> Word {
        debug_assert!(offset < u64::BITS);
        Word(self.0 & !(1u64 << offset))
    }

    #[inline]
    #[must_use]
    pub const fn flip(self, offset: u32) -> Word {
        debug_assert!(offset < u64::BITS);
        Word(self.0 ^ (1u64 << offset))
    }

    #[inline]
    pub const fn get(self, offset: u32) -> bool {
        debug_assert!(offset < u64::BITS);
        (self.0 >> offset) & 1 != 0
    }

    #[inline]
    #[must_use]
    pub const fn set_all(self) -> Word {
        Word::ONES
    }

    #[inline]
    #[must_use]
    pub const fn clear_all(self) -> Word {
        Word::ZERO
    }

    #[inline]
    pub const fn ones_count(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn and(self, other: Word) -> Word {
        Word(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn or(self, other: Word) -> Word {
        Word(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn xor(self, other: Word) -> Word {
        Word(self.0 ^ other.0)
    }

    /// Shifts the word toward higher bit offsets by `count` (`0..64`).
    ///
    /// Returns `(shifted, carry)`, where `carry` holds the bits pushed out past
    /// offset 63, already aligned to the low end so that the next word up can
    /// absorb them with a plain `or`.
    #[inline]
    pub const fn shl_with_carry(self, count: u32) -> (Word, Word) {
        debug_assert!(count < u64::BITS);
        if count == 0 {
            (self, Word::ZERO)
        } else {
            (Word(self.0 << count), Word(self.0 >> (u64::BITS - count)))
        }
    }

    /// Shifts the word toward lower bit offsets by `count` (`0..64`).
    ///
    /// Returns `(shifted, carry)`, where `carry` holds the bits pushed out below
    /// offset 0, aligned to the high end for the next word down.
    #[inline]
    pub const fn shr_with_carry(self, count: u32) -> (Word, Word) {
        debug_assert!(count < u64::BITS);
        if count == 0 {
            (self, Word::ZERO)
        } else {
            (Word(self.0 >> count), Word(self.0 << (u64::BITS - count)))
        }
    }

    /// Iterates the offsets of the set bits in ascending order.
    pub fn iter_ones(self) -> impl Iterator<Item = u32> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                None
            } else {
                let offset = bits.trailing_zeros();
                bits &= bits - 1;
                Some(offset)
            }
        })
    }
}

impl Not for Word {
    type Output = Word;

    #[inline]
    fn not(self) -> Word {
        Word(!self.0)
    }
}

impl From<u64> for Word {
    fn from(bits: u64) -> Self {
        Word(bits)
    }
}

impl From<Word> for u64 {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:#018x})", self.0)
    }
}
