//! Dictionary word representation
//!
//! A `Word` is a fixed-length sequence of letters over the A–Z alphabet,
//! stored uppercase. The length is set by the dictionary in use (5 for
//! Wordle, more for Sutom) and stays constant within a session.

use std::fmt;

/// A word over the A–Z alphabet, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAlphabetic => write!(f, "Word must contain only ASCII letters A-Z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if the string is empty or contains anything
    /// other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use sutom_solver::core::Word;
    ///
    /// let word = Word::new("tarie").unwrap();
    /// assert_eq!(word.text(), "TARIE");
    ///
    /// assert!(Word::new("mot 5").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::NonAlphabetic);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a constructed word, kept for slice-like symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("TARIE").unwrap();
        assert_eq!(word.text(), "TARIE");
        assert_eq!(word.bytes(), b"TARIE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("sortie").unwrap();
        assert_eq!(word.text(), "SORTIE");

        let word2 = Word::new("SoRtIe").unwrap();
        assert_eq!(word2.text(), "SORTIE");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("A").unwrap().len(), 1);
        assert_eq!(Word::new("DIAMETRE").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("TAR1E"), Err(WordError::NonAlphabetic));
        assert_eq!(Word::new("TAR E"), Err(WordError::NonAlphabetic));
        assert_eq!(Word::new("TARIÉ"), Err(WordError::NonAlphabetic));
        assert_eq!(Word::new("TAR-E"), Err(WordError::NonAlphabetic));
    }

    #[test]
    fn word_display() {
        let word = Word::new("repas").unwrap();
        assert_eq!(format!("{word}"), "REPAS");
    }

    #[test]
    fn word_equality_ignores_input_case() {
        let word1 = Word::new("REPAS").unwrap();
        let word2 = Word::new("repas").unwrap();
        let word3 = Word::new("SAPIN").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
