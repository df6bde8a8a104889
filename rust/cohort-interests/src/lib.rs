//! Grouping of people by shared interests.
//!
//! A [`Dataset`] is filled with `person -> interest` rows (usually from a TSV
//! file, see [`tsv`]), then [`Dataset::generate`] finds sets of interests that
//! are shared by enough people. Every person and interest is tracked as a
//! [`BitField`](cohort_bitfield::BitField) over the other dimension, so the
//! heavy lifting is bitwise `and`/`xor` plus population counts.

pub mod dataset;
pub mod interest_set;
pub mod options;
pub mod tsv;

#[cfg(test)]
mod tests;

pub use dataset::{Dataset, DatasetStats, GroupResult};
pub use interest_set::InterestSet;
pub use options::GroupingOptions;
