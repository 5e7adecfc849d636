use crate::models::{NGramSet, NormalizedText};

pub use crate::models::DEFAULT_NGRAM_SIZE;

/// Dice overlap of the length-`n` window sets of `a` and `b`.
///
/// Returns 0.0 when either text is shorter than `n`, including when both are.
pub fn ngram_similarity(a: &NormalizedText, b: &NormalizedText, n: usize) -> f64 {
    let a_grams = NGramSet::from_text(a, n);
    let b_grams = NGramSet::from_text(b, n);
    a_grams.dice(&b_grams)
}
