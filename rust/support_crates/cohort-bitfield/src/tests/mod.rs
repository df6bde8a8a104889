
use crate::{BitField, Word};

/// Lengths around word boundaries, used by the model-based tests.
pub(crate) const LENGTHS: [usize; 12] = [0, 1, 5, 63, 64, 65, 127, 128, 129, 163, 200, 257];

/// Builds a random field together with its `Vec<bool>` reference model.
pub(crate) fn random_field(len: usize) -> (BitField, Vec<bool>) {
    let model: Vec<bool> = (0..len).map(|_| fastrand::bool()).collect();
    let field = BitField::with_positions(
        len as isize,
        model
            .iter()
            .enumerate()
            .filter(|(_, bit)| **bit)
            .map(|(i, _)| i as isize),
    );
    (field, model)
}

pub(crate) fn to_model(field: &BitField) -> Vec<bool> {
    (0..field.len()).map(|i| field.get(i as isize)).collect()
}

/// Asserts that no bit at a position `>= len` is set in the storage.
pub(crate) fn assert_tail_clear(field: &BitField) {
    assert!(!field.words().is_empty());
    for (i, word) in field.words().iter().enumerate() {
        let first = i * Word::BITS;
        let used = field.len().saturating_sub(first).min(Word::BITS);
        let padding = word.and(!Word::low_mask(used));
        assert_eq!(
            padding,
            Word::ZERO,
            "padding bits set in word {i} (len: {})",
            field.len()
        );
    }
}
