//! The [`BitField`] type: storage, construction and single-bit access.

use std::fmt;

use cohort_common::{Result, error::Error};

use crate::{index, word::Word};

/// A variable-length bit vector stored as a sequence of 64-bit [`Word`]s.
///
/// # Storage Format
///
/// Bit `i` lives in word `i / 64` at offset `i % 64`, LSB first. The field always
/// holds at least one word, even when `len == 0`. All bits at positions `>= len`
/// in the last word are kept zero at all times; every operation that could set
/// them (`set_all`, `not`, `xor`, `shift` toward higher positions) clears them
/// again before returning.
///
/// # Positions
///
/// Positions are `isize` and are normalized modulo `len`, so every positional
/// accessor is total: `get(-1)` reads the last bit, `get(len)` reads the first.
/// On an empty field `get` always returns `false` and the mutators do nothing.
///
/// # Mutation and Aliasing
///
/// Length-preserving operations (`set`, `clear`, `flip`, `set_all`, `clear_all`,
/// `and`, `or`, `xor`, `not`, `shift`, `rotate`) mutate the receiver in place and
/// return `&mut Self`, so calls can be chained and every link of the chain refers
/// to the same storage. Operations that may change the length (`resize`, `mid`,
/// `left`, `right`, `append`) and `clone` return a new instance and leave the
/// receiver untouched. Callers that need an independent copy must clone first.
///
/// # Length Mismatch
///
/// `and`, `or` and `xor` are fail-soft: with operands of different lengths they
/// leave the receiver unchanged and report nothing. The `try_*` variants return
/// [`ErrorKind::LengthMismatch`](cohort_common::error::ErrorKind::LengthMismatch)
/// instead.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitField {
    pub(crate) words: Vec<Word>,
    pub(crate) len: usize,
}

impl BitField {
    /// Creates a zeroed field of `len` bits. Negative lengths are clamped to `0`.
    pub fn new(len: isize) -> BitField {
        Self::zeroed(index::clamp_len(len))
    }

    /// Creates a field of `len` bits with the given positions set.
    ///
    /// Positions are normalized like everywhere else, so out-of-range values wrap.
    pub fn with_positions(len: isize, positions: impl IntoIterator<Item = isize>) -> BitField {
        let mut field = Self::new(len);
        field.set_mul(positions);
        field
    }

    pub(crate) fn zeroed(len: usize) -> BitField {
        BitField {
            words: vec![Word::ZERO; index::word_count(len)],
            len,
        }
    }

    /// Returns the number of significant bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the field holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the underlying words. Bits beyond `len()` are always zero.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Sets the bit at `pos`.
    pub fn set(&mut self, pos: isize) -> &mut Self {
        self.update(pos, Word::set)
    }

    /// Sets every bit in `positions`.
    pub fn set_mul(&mut self, positions: impl IntoIterator<Item = isize>) -> &mut Self {
        for pos in positions {
            self.set(pos);
        }
        self
    }

    /// Clears the bit at `pos`.
    pub fn clear(&mut self, pos: isize) -> &mut Self {
        self.update(pos, Word::clear)
    }

    /// Clears every bit in `positions`.
    pub fn clear_mul(&mut self, positions: impl IntoIterator<Item = isize>) -> &mut Self {
        for pos in positions {
            self.clear(pos);
        }
        self
    }

    /// Inverts the bit at `pos`.
    pub fn flip(&mut self, pos: isize) -> &mut Self {
        self.update(pos, Word::flip)
    }

    /// Returns the bit at `pos`. Never fails; an empty field reads as all zeros.
    pub fn get(&self, pos: isize) -> bool {
        if self.is_empty() {
            return false;
        }
        let (word_index, offset) = index::locate(pos, self.len);
        self.words[word_index].get(offset)
    }

    /// Sets every bit in `[0, len)`; the padding past `len` stays zero.
    pub fn set_all(&mut self) -> &mut Self {
        self.map_words(Word::set_all).mask_tail()
    }

    /// Clears every bit.
    pub fn clear_all(&mut self) -> &mut Self {
        self.map_words(Word::clear_all)
    }

    /// Returns the number of set bits.
    pub fn ones_count(&self) -> usize {
        self.words.iter().map(|w| w.ones_count()).sum()
    }

    /// Iterates the positions of the set bits in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(i, w)| w.iter_ones().map(move |offset| i * Word::BITS + offset as usize))
    }

    /// Returns `true` if both fields have the same length and the same bits.
    pub fn equal(&self, other: &BitField) -> bool {
        self == other
    }

    /// Alias of [`Clone::clone`].
    pub fn copy(&self) -> BitField {
        self.clone()
    }

    /// Overwrites the bits of `dest` with the bits of `self` without reallocating.
    ///
    /// Returns `false` and leaves `dest` untouched if the lengths differ.
    pub fn bit_copy(&self, dest: &mut BitField) -> bool {
        match self.try_bit_copy(dest) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("bit_copy skipped: {e}");
                false
            }
        }
    }

    /// Like [`bit_copy`](Self::bit_copy), but reports a length mismatch as an error.
    pub fn try_bit_copy(&self, dest: &mut BitField) -> Result<()> {
        if self.len != dest.len {
            return Err(Error::length_mismatch(self.len, dest.len));
        }
        dest.words.copy_from_slice(&self.words);
        Ok(())
    }

    pub(crate) fn map_words(&mut self, op: impl Fn(Word) -> Word) -> &mut Self {
        for word in self.words.iter_mut() {
            *word = op(*word);
        }
        self
    }

    fn update(&mut self, pos: isize, op: impl FnOnce(Word, u32) -> Word) -> &mut Self {
        if !self.is_empty() {
            let (word_index, offset) = index::locate(pos, self.len);
            let word = &mut self.words[word_index];
            *word = op(*word, offset);
        }
        self
    }

    /// Zeroes every bit at a position `>= len` in the last word.
    pub(crate) fn mask_tail(&mut self) -> &mut Self {
        let used = self.len % Word::BITS;
        if self.len == 0 {
            self.words.fill(Word::ZERO);
        } else if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last = last.and(Word::low_mask(used));
            }
        }
        self
    }
}

impl Default for BitField {
    fn default() -> Self {
        BitField::zeroed(0)
    }
}

/// Renders the bits as `0`/`1` characters, position `0` first.
impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (0..self.len).try_for_each(|i| {
            let (word_index, offset) = index::split(i);
            f.write_str(if self.words[word_index].get(offset) { "1" } else { "0" })
        })
    }
}

impl fmt::Debug for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitField(len: {}, bits: {})", self.len, self)
    }
}
