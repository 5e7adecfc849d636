use std::fmt;

use crate::scoring::normalizer;

/// Raw text of one input, as read by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn normalized(&self) -> NormalizedText {
        normalizer::normalize(&self.text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A document after canonicalization: lowercase code points with all
/// whitespace and punctuation removed.
///
/// Indexing is by code point, never by byte or UTF-16 unit, so CJK text and
/// astral-plane characters each count as one position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedText {
    chars: Vec<char>,
}

impl NormalizedText {
    pub(crate) fn from_chars(chars: Vec<char>) -> Self {
        Self { chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_counts_code_points() {
        let text = Document::new("中文𠀋ab").normalized();
        assert_eq!(text.len(), 5);
        assert_eq!(text.to_string(), "中文𠀋ab");
    }

    #[test]
    fn test_empty_document_normalizes_to_empty() {
        let text = Document::default().normalized();
        assert!(text.is_empty());
        assert_eq!(text, NormalizedText::default());
    }

    #[test]
    fn test_from_raw_text() {
        let doc = Document::from("a, b");
        assert_eq!(doc, Document::new(String::from("a, b")));
        assert_eq!(doc.normalized().len(), 2);
    }
}
