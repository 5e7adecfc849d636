use crate::models::{CharSet, NormalizedText};

/// Dice overlap of the distinct characters of `a` and `b`; 0.0 if either is empty.
pub fn char_set_similarity(a: &NormalizedText, b: &NormalizedText) -> f64 {
    CharSet::from_text(a).dice(&CharSet::from_text(b))
}
