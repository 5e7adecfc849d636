//! Plagiarism similarity scoring for pairs of text documents.
//!
//! The [`scoring`] module holds the comparison pipeline: Unicode
//! normalization, longest-common-subsequence, 3-gram overlap and
//! character-set overlap, blended into one [`SimilarityScore`]. The
//! [`cli`], [`config`] and [`errors`] modules wrap it into the
//! `paperdiff` command-line tool.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod scoring;
pub mod utils;

pub use errors::CheckerError;
pub use models::{CharSet, Document, NGramSet, NormalizedText, ScoreBreakdown, SimilarityScore};
pub use scoring::{compare, normalize, similarity, ScoreWeights};
