//! Text-normalization and similarity-scoring pipeline.
//!
//! ```text
//! original ─┐                 ┌─ lcs ──────┐
//!           ├─ normalizer ────┼─ ngram ────┼─ aggregator ─ SimilarityScore
//! candidate ┘                 └─ charset ──┘
//! ```
//!
//! Everything here is synchronous and free of shared state; each call
//! compares exactly one pair of documents.

pub mod aggregator;
pub mod charset;
pub mod lcs;
pub mod ngram;
pub mod normalizer;

pub use aggregator::{score_breakdown, similarity, ScoreWeights};
pub use charset::char_set_similarity;
pub use lcs::{lcs_length, longest_common_subsequence};
pub use ngram::ngram_similarity;
pub use normalizer::{normalize, normalize_opt};

use crate::models::SimilarityScore;

/// Normalizes both raw texts and scores the pair.
pub fn compare(original: &str, candidate: &str) -> SimilarityScore {
    similarity(&normalize(original), &normalize(candidate))
}
