//! Longest common subsequence over normalized code points.
//!
//! Time is `O(|a|·|b|)`. Memory is two rows sized by the shorter operand,
//! so large documents cost CPU rather than RAM; callers that need a hard
//! bound should cap input length before comparing.

use crate::models::NormalizedText;

/// Length ratio above which the LCS is penalized.
pub const LENGTH_RATIO_THRESHOLD: f64 = 1.5;
/// Multiplier applied to the LCS when the length ratio exceeds the threshold.
pub const LENGTH_PENALTY: f64 = 0.95;

/// Raw LCS length of `a` and `b`. Zero when either is empty.
pub fn longest_common_subsequence(a: &NormalizedText, b: &NormalizedText) -> usize {
    let (rows, cols) = if a.len() >= b.len() {
        (a.chars(), b.chars())
    } else {
        (b.chars(), a.chars())
    };
    if cols.is_empty() {
        return 0;
    }

    // prev[j] holds cell (i-1, j); curr[j] is filled left to right as cell (i, j).
    let mut prev = vec![0usize; cols.len() + 1];
    let mut curr = vec![0usize; cols.len() + 1];
    for &row_char in rows {
        for (j, &col_char) in cols.iter().enumerate() {
            curr[j + 1] = if row_char == col_char {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[cols.len()]
}

/// LCS length with the length-disparity penalty applied.
///
/// When `max(|a|,|b|) / min(|a|,|b|)` exceeds [`LENGTH_RATIO_THRESHOLD`] the
/// raw length is scaled by [`LENGTH_PENALTY`] and truncated.
pub fn lcs_length(a: &NormalizedText, b: &NormalizedText) -> usize {
    let raw = longest_common_subsequence(a, b);
    penalize(raw, a.len(), b.len())
}

pub(crate) fn penalize(raw: usize, a_len: usize, b_len: usize) -> usize {
    let shorter = a_len.min(b_len);
    if shorter == 0 {
        return 0;
    }
    let ratio = a_len.max(b_len) as f64 / shorter as f64;
    if ratio > LENGTH_RATIO_THRESHOLD {
        (raw as f64 * LENGTH_PENALTY).max(0.0) as usize
    } else {
        raw
    }
}
