//! Shifting, rotation, resizing and slicing.
//!
//! Everything here reduces to two word-level primitives: a shift toward higher
//! positions and a shift toward lower positions, each carrying the bits that
//! leave one word into its neighbor. Slicing and concatenation are built from
//! those shifts plus [`BitField::resize`] and [`BitField::or`].

use crate::{bitfield::BitField, index, word::Word};

impl BitField {
    /// Returns a copy of this field with `new_len` bits (negative values clamp to `0`).
    ///
    /// Bits below `min(len, new_len)` are preserved and grown positions are zero.
    /// The receiver is left untouched.
    pub fn resize(&self, new_len: isize) -> BitField {
        self.resized(index::clamp_len(new_len))
    }

    /// Moves every bit `count` positions: positive toward higher positions,
    /// negative toward lower ones. Bits pushed past either end are dropped and
    /// vacated positions become zero; `|count| >= len` clears the field.
    pub fn shift(&mut self, count: isize) -> &mut Self {
        if count >= 0 {
            self.shift_high(count.unsigned_abs())
        } else {
            self.shift_low(count.unsigned_abs())
        }
    }

    /// Circular shift: like [`shift`](Self::shift), but bits leaving one end
    /// re-enter at the other. `count` is reduced modulo `len`.
    pub fn rotate(&mut self, count: isize) -> &mut Self {
        let split = index::normalize(count, self.len);
        if split == 0 {
            return self;
        }
        // The top `split` bits wrap around to the bottom.
        let mut wrapped = self.clone();
        wrapped.shift_low(self.len - split);
        self.shift_high(split).or(&wrapped)
    }

    /// Extracts `count` bits starting at the normalized `pos` into a new field.
    ///
    /// `count` is clamped to `[0, len]`. Positions past the end of the receiver
    /// do not wrap; they read as zero.
    pub fn mid(&self, pos: isize, count: isize) -> BitField {
        let count = index::clamp_len(count).min(self.len);
        let start = index::normalize(pos, self.len);
        let mut slice = self.clone();
        slice.shift_low(start);
        slice.resized(count)
    }

    /// The first `count` bits, as a new field.
    pub fn left(&self, count: isize) -> BitField {
        self.mid(0, count)
    }

    /// The last `count` bits, as a new field.
    pub fn right(&self, count: isize) -> BitField {
        let count = index::clamp_len(count).min(self.len);
        self.mid((self.len - count) as isize, count as isize)
    }

    /// Concatenates `other` after `self` into a new field of
    /// `self.len() + other.len()` bits.
    pub fn append(&self, other: &BitField) -> BitField {
        if other.is_empty() {
            return self.clone();
        }
        let len = self.len + other.len;
        let mut tail = other.resized(len);
        tail.shift_high(self.len);
        let mut joined = self.resized(len);
        joined.or(&tail);
        joined
    }

    pub(crate) fn resized(&self, len: usize) -> BitField {
        let mut resized = BitField::zeroed(len);
        let keep = resized.words.len().min(self.words.len());
        resized.words[..keep].copy_from_slice(&self.words[..keep]);
        resized.mask_tail();
        resized
    }

    /// Shifts toward higher positions. Words are visited from the top down so
    /// that every source word is read before it is overwritten.
    fn shift_high(&mut self, distance: usize) -> &mut Self {
        if distance == 0 {
            return self;
        }
        if distance >= self.len {
            return self.clear_all();
        }
        let word_shift = distance / Word::BITS;
        let bit_shift = (distance % Word::BITS) as u32;
        let count = self.words.len();
        for i in (0..count).rev() {
            let source = match i.checked_sub(word_shift) {
                Some(src) => self.words[src],
                None => Word::ZERO,
            };
            let (shifted, carry) = source.shl_with_carry(bit_shift);
            self.words[i] = shifted;
            if let Some(next) = self.words.get_mut(i + 1) {
                *next = next.or(carry);
            }
        }
        self.mask_tail()
    }

    /// Shifts toward lower positions. Words are visited from the bottom up so
    /// that every source word is read before it is overwritten.
    fn shift_low(&mut self, distance: usize) -> &mut Self {
        if distance == 0 {
            return self;
        }
        if distance >= self.len {
            return self.clear_all();
        }
        let word_shift = distance / Word::BITS;
        let bit_shift = (distance % Word::BITS) as u32;
        for i in 0..self.words.len() {
            let source = self
                .words
                .get(i + word_shift)
                .copied()
                .unwrap_or(Word::ZERO);
            let (shifted, carry) = source.shr_with_carry(bit_shift);
            self.words[i] = shifted;
            if let Some(prev) = i.checked_sub(1) {
                self.words[prev] = self.words[prev].or(carry);
            }
        }
        self
    }
}
