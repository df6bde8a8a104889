//! Elementwise boolean algebra over equal-length fields.

use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, Not};

use cohort_common::{Result, error::Error};

use crate::{bitfield::BitField, word::Word};

impl BitField {
    /// Bitwise AND with `other`, in place. No-op if the lengths differ.
    pub fn and(&mut self, other: &BitField) -> &mut Self {
        self.combine_or_skip("and", other, Word::and)
    }

    /// Bitwise OR with `other`, in place. No-op if the lengths differ.
    pub fn or(&mut self, other: &BitField) -> &mut Self {
        self.combine_or_skip("or", other, Word::or)
    }

    /// Bitwise XOR with `other`, in place. No-op if the lengths differ.
    pub fn xor(&mut self, other: &BitField) -> &mut Self {
        self.combine_or_skip("xor", other, Word::xor).mask_tail()
    }

    /// Inverts every bit, in place.
    pub fn not(&mut self) -> &mut Self {
        self.map_words(Not::not).mask_tail()
    }

    /// Bitwise AND with `other`, in place.
    ///
    /// Returns `LengthMismatch` and leaves `self` unchanged if the lengths differ.
    pub fn try_and(&mut self, other: &BitField) -> Result<&mut Self> {
        self.check_len(other)?;
        Ok(self.combine(other, Word::and))
    }

    /// Bitwise OR with `other`, in place.
    ///
    /// Returns `LengthMismatch` and leaves `self` unchanged if the lengths differ.
    pub fn try_or(&mut self, other: &BitField) -> Result<&mut Self> {
        self.check_len(other)?;
        Ok(self.combine(other, Word::or))
    }

    /// Bitwise XOR with `other`, in place.
    ///
    /// Returns `LengthMismatch` and leaves `self` unchanged if the lengths differ.
    pub fn try_xor(&mut self, other: &BitField) -> Result<&mut Self> {
        self.check_len(other)?;
        Ok(self.combine(other, Word::xor).mask_tail())
    }

    fn check_len(&self, other: &BitField) -> Result<()> {
        if self.len != other.len {
            return Err(Error::length_mismatch(self.len, other.len));
        }
        Ok(())
    }

    fn combine_or_skip(
        &mut self,
        name: &str,
        other: &BitField,
        op: impl Fn(Word, Word) -> Word,
    ) -> &mut Self {
        if let Err(e) = self.check_len(other) {
            log::debug!("{name} skipped: {e}");
            return self;
        }
        self.combine(other, op)
    }

    fn combine(&mut self, other: &BitField, op: impl Fn(Word, Word) -> Word) -> &mut Self {
        for (dst, &src) in self.words.iter_mut().zip(other.words.iter()) {
            *dst = op(*dst, src);
        }
        self
    }
}

impl BitAndAssign<&BitField> for BitField {
    fn bitand_assign(&mut self, rhs: &BitField) {
        self.and(rhs);
    }
}

impl BitOrAssign<&BitField> for BitField {
    fn bitor_assign(&mut self, rhs: &BitField) {
        self.or(rhs);
    }
}

impl BitXorAssign<&BitField> for BitField {
    fn bitxor_assign(&mut self, rhs: &BitField) {
        self.xor(rhs);
    }
}
