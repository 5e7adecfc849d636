use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::models::NormalizedText;

/// Canonicalizes raw text for comparison.
///
/// Applied in order: NFKC composition, removal of Unicode whitespace,
/// removal of every Unicode punctuation category, then locale-independent
/// lowercasing. Uncased scripts such as CJK pass through unchanged.
///
/// A closing NFKC pass composes marks left next to a base letter once the
/// characters between them are removed, which keeps the result idempotent.
pub fn normalize(text: &str) -> NormalizedText {
    let stripped: String = text
        .nfkc()
        .filter(|c| !c.is_whitespace())
        .filter(|c| !is_punctuation(*c))
        .collect();
    // Whole-string lowercasing applies the final-sigma rule.
    let chars = stripped.to_lowercase().nfkc().collect();
    NormalizedText::from_chars(chars)
}

/// Missing input normalizes to empty text.
pub fn normalize_opt(text: Option<&str>) -> NormalizedText {
    text.map(normalize).unwrap_or_default()
}

fn is_punctuation(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Punctuation
}
