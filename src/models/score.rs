use std::fmt;

use serde::{Deserialize, Serialize};

/// Similarity of two documents in `[0.0, 1.0]`; 1.0 is maximal similarity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    pub const IDENTICAL: SimilarityScore = SimilarityScore(1.0);
    pub const NONE: SimilarityScore = SimilarityScore(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Value rounded to two decimal places, ties away from zero.
    pub fn rounded(&self) -> f64 {
        format_hundredths(self.0).parse().unwrap_or(self.0)
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hundredths(self.0))
    }
}

/// Two-decimal text of `value`, rounding half-up on its shortest decimal
/// form rather than on the binary value, so 0.575 gives "0.58".
fn format_hundredths(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, render(&digits[..split]), render(&digits[split..]))
}

/// Every signal that went into one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Code points in the normalized original.
    pub original_len: usize,
    /// Code points in the normalized candidate.
    pub candidate_len: usize,
    /// Unpenalized longest common subsequence.
    pub raw_lcs: usize,
    /// LCS after the length-disparity penalty.
    pub lcs: usize,
    /// `lcs / original_len`.
    pub lcs_ratio: f64,
    /// Dice overlap of 3-gram sets.
    pub ngram: f64,
    /// Dice overlap of distinct characters.
    pub char_set: f64,
    pub score: SimilarityScore,
}

impl ScoreBreakdown {
    /// Breakdown for a pair decided before any signal was computed.
    pub(crate) fn short_circuit(original_len: usize, candidate_len: usize, score: SimilarityScore) -> Self {
        Self {
            original_len,
            candidate_len,
            raw_lcs: 0,
            lcs: 0,
            lcs_ratio: 0.0,
            ngram: 0.0,
            char_set: 0.0,
            score,
        }
    }
}
