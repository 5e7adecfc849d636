use std::collections::HashSet;
use std::hash::Hash;

use super::document::NormalizedText;

/// Window length used by the n-gram scorer.
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// Distinct contiguous windows of a normalized text, borrowed from it.
#[derive(Debug, Clone, Default)]
pub struct NGramSet<'a> {
    grams: HashSet<&'a [char]>,
}

impl<'a> NGramSet<'a> {
    /// Collects every length-`n` window (step 1). Texts shorter than `n`, and
    /// `n == 0`, give an empty set.
    pub fn from_text(text: &'a NormalizedText, n: usize) -> Self {
        if n == 0 || text.len() < n {
            return Self::default();
        }
        Self {
            grams: text.chars().windows(n).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    #[cfg(test)]
    fn contains(&self, gram: &[char]) -> bool {
        self.grams.contains(gram)
    }

    pub fn dice(&self, other: &NGramSet<'_>) -> f64 {
        dice_coefficient(&self.grams, &other.grams)
    }
}

/// Distinct code points of a normalized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: HashSet<char>,
}

impl CharSet {
    pub fn from_text(text: &NormalizedText) -> Self {
        Self {
            chars: text.chars().iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[cfg(test)]
    fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn dice(&self, other: &CharSet) -> f64 {
        dice_coefficient(&self.chars, &other.chars)
    }
}

/// `2|A ∩ B| / (|A| + |B|)`, or 0.0 when either set is empty.
fn dice_coefficient<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let shared = small.iter().filter(|item| large.contains(*item)).count();
    (2.0 * shared as f64) / (a.len() + b.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::normalize;

    #[test]
    fn test_ngrams_collapse_duplicates() {
        let text = normalize("aaaaa");
        let grams = NGramSet::from_text(&text, 3);
        assert_eq!(grams.len(), 1);
        assert!(grams.contains(&['a', 'a', 'a']));
    }

    #[test]
    fn test_ngrams_short_text_is_empty() {
        let text = normalize("ab");
        assert!(NGramSet::from_text(&text, 3).is_empty());
    }

    #[test]
    fn test_ngrams_zero_width_is_empty() {
        let text = normalize("abc");
        assert!(NGramSet::from_text(&text, 0).is_empty());
    }

    #[test]
    fn test_ngrams_sliding_window() {
        let text = normalize("abcd");
        let grams = NGramSet::from_text(&text, 3);
        assert_eq!(grams.len(), 2);
        assert!(grams.contains(&['a', 'b', 'c']));
        assert!(grams.contains(&['b', 'c', 'd']));
    }

    #[test]
    fn test_char_set_distinct() {
        let text = normalize("abcabc中中");
        let set = CharSet::from_text(&text);
        assert_eq!(set.len(), 4);
        assert!(set.contains('中'));
    }

    #[test]
    fn test_dice_partial_overlap() {
        let a: HashSet<char> = "abcd".chars().collect();
        let b: HashSet<char> = "cdef".chars().collect();
        assert!((dice_coefficient(&a, &b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_dice_empty_operand() {
        let a: HashSet<char> = HashSet::new();
        let b: HashSet<char> = "x".chars().collect();
        assert_eq!(dice_coefficient(&a, &b), 0.0);
        assert_eq!(dice_coefficient(&a, &a), 0.0);
    }
}
