use serde::Serialize;
use tracing::debug;

use super::charset::char_set_similarity;
use super::lcs::{longest_common_subsequence, penalize};
use super::ngram::{ngram_similarity, DEFAULT_NGRAM_SIZE};
use crate::models::{NormalizedText, ScoreBreakdown, SimilarityScore};

/// Relative weight of each signal in the blended score. Weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    /// Longest-common-subsequence ratio; rewards insertions and deletions.
    pub lcs: f64,
    /// 3-gram overlap; rewards locally preserved order after reshuffling.
    pub ngram: f64,
    /// Distinct-character overlap; catches character substitutions.
    pub char_set: f64,
}

impl ScoreWeights {
    pub const STANDARD: ScoreWeights = ScoreWeights {
        lcs: 0.5,
        ngram: 0.35,
        char_set: 0.15,
    };

    pub fn total(&self) -> f64 {
        self.lcs + self.ngram + self.char_set
    }

    pub fn combine(&self, lcs_ratio: f64, ngram: f64, char_set: f64) -> f64 {
        self.lcs * lcs_ratio + self.ngram * ngram + self.char_set * char_set
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Blended similarity of `candidate` against `original`.
///
/// Asymmetric: the LCS ratio is always taken over the original's length.
pub fn similarity(original: &NormalizedText, candidate: &NormalizedText) -> SimilarityScore {
    score_breakdown(original, candidate).score
}

/// Computes every signal for the pair and the resulting score.
pub fn score_breakdown(original: &NormalizedText, candidate: &NormalizedText) -> ScoreBreakdown {
    let (original_len, candidate_len) = (original.len(), candidate.len());

    // Two empty texts are vacuously identical.
    if original.is_empty() && candidate.is_empty() {
        return ScoreBreakdown::short_circuit(0, 0, SimilarityScore::IDENTICAL);
    }
    // The LCS ratio divides by the original's length.
    if original.is_empty() || candidate.is_empty() {
        return ScoreBreakdown::short_circuit(original_len, candidate_len, SimilarityScore::NONE);
    }

    let weights = ScoreWeights::STANDARD;
    let raw_lcs = longest_common_subsequence(original, candidate);
    let lcs = penalize(raw_lcs, original_len, candidate_len);
    let lcs_ratio = lcs as f64 / original_len as f64;
    let ngram = ngram_similarity(original, candidate, DEFAULT_NGRAM_SIZE);
    let char_set = char_set_similarity(original, candidate);
    let score = SimilarityScore::new(weights.combine(lcs_ratio, ngram, char_set));

    debug!(
        original_len,
        candidate_len,
        raw_lcs,
        lcs,
        lcs_ratio,
        ngram,
        char_set,
        score = score.value(),
        "Scored document pair"
    );

    ScoreBreakdown {
        original_len,
        candidate_len,
        raw_lcs,
        lcs,
        lcs_ratio,
        ngram,
        char_set,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::normalize;

    fn score(a: &str, b: &str) -> f64 {
        similarity(&normalize(a), &normalize(b)).value()
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((ScoreWeights::STANDARD.total() - 1.0).abs() < 1e-12);
        assert_eq!(ScoreWeights::default(), ScoreWeights::STANDARD);
    }

    #[test]
    fn test_combine_all_ones() {
        assert!((ScoreWeights::STANDARD.combine(1.0, 1.0, 1.0) - 1.0).abs() < 1e-12);
        assert_eq!(ScoreWeights::STANDARD.combine(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_both_empty_is_identical() {
        assert_eq!(score("", ""), 1.0);
        assert_eq!(score("  ，。", "\n"), 1.0);
    }

    #[test]
    fn test_empty_original_is_zero() {
        assert_eq!(score("", "abc"), 0.0);
    }

    #[test]
    fn test_empty_candidate_is_zero() {
        assert_eq!(score("abc", ""), 0.0);
    }

    #[test]
    fn test_identical() {
        assert!((score("今天晚上我要去看电影", "今天晚上我要去看电影") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(score("abcdef", "uvwxyz"), 0.0);
    }

    #[test]
    fn test_transposed_letters() {
        // LCS 3 of 5, no shared 3-grams, identical character sets.
        let breakdown = score_breakdown(&normalize("ABCDE"), &normalize("ACBED"));
        assert_eq!(breakdown.raw_lcs, 3);
        assert_eq!(breakdown.lcs, 3);
        assert!((breakdown.lcs_ratio - 0.6).abs() < 1e-12);
        assert_eq!(breakdown.ngram, 0.0);
        assert_eq!(breakdown.char_set, 1.0);
        assert!((breakdown.score.value() - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_deletion_breakdown() {
        let breakdown = score_breakdown(&normalize("今天晚上我要去看电影"), &normalize("我晚上要去看电影"));
        assert_eq!(breakdown.lcs, 7);
        assert!((breakdown.ngram - 6.0 / 14.0).abs() < 1e-12);
        assert!((breakdown.char_set - 16.0 / 18.0).abs() < 1e-12);
        let expected = 0.5 * 0.7 + 0.35 * (6.0 / 14.0) + 0.15 * (16.0 / 18.0);
        assert!((breakdown.score.value() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_length_penalty_lowers_ratio() {
        let original = normalize(&"ab".repeat(10));
        let candidate = normalize(&"ab".repeat(20));
        let breakdown = score_breakdown(&original, &candidate);
        assert_eq!(breakdown.raw_lcs, 20);
        assert_eq!(breakdown.lcs, 19);
        assert!((breakdown.lcs_ratio - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_uses_original_length() {
        let short = normalize("abcdef");
        let long = normalize("abcdefgh");
        let forward = score_breakdown(&short, &long);
        let backward = score_breakdown(&long, &short);
        assert_eq!(forward.lcs, backward.lcs);
        assert!((forward.lcs_ratio - 1.0).abs() < 1e-12);
        assert!((backward.lcs_ratio - 0.75).abs() < 1e-12);
    }
}
