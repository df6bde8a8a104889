//! Variable-length bit vectors backed by 64-bit words.
//!
//! The central type is [`BitField`], an arbitrary-length sequence of bits with
//! chainable in-place boolean algebra (`and`, `or`, `xor`, `not`) and structural
//! operations (`shift`, `rotate`, `resize`, `mid`, `left`, `right`, `append`).
//!
//! Positions are signed and always wrap modulo the field length, so every
//! position-based accessor is total: `get(-1)` reads the last bit and
//! `get(len)` reads the first one.

pub mod bitfield;
pub mod index;
pub mod word;

mod algebra;
mod structural;

#[cfg(test)]
mod tests;

pub use bitfield::BitField;
pub use word::Word;
