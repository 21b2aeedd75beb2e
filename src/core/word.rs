//! Five-letter word representation
//!
//! A Word stores a validated, uppercase 5-letter word along with per-letter counts
//! used by the guess evaluator's letter budget.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter word, normalized to uppercase ASCII
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for malformed words and rows
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_duel::core::Word;
    ///
    /// let word = Word::new("world").unwrap();
    /// assert_eq!(word.text(), "WORLD");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("w0rld").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            letters: letters.map(|b| b.to_ascii_uppercase()),
        })
    }

    /// Get the word as an uppercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }

    /// Get the uppercase letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        char::from(self.letters[position])
    }

    /// Check if the word contains a specific letter (case-insensitive)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        let upper = letter.to_ascii_uppercase();
        self.letters.iter().any(|&b| char::from(b) == upper)
    }

    /// Get the count of each letter in the word
    ///
    /// Used as the letter budget when scoring guesses with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("WORLD").unwrap();
        assert_eq!(word.text(), "WORLD");
        assert_eq!(word.letters(), b"WORLD");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("world").unwrap().text(), "WORLD");
        assert_eq!(Word::new("WoRlD").unwrap().text(), "WORLD");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("wor1d"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("wor d"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("wörld"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("hello").unwrap();
        assert_eq!(word.letter_at(0), 'H');
        assert_eq!(word.letter_at(4), 'O');
    }

    #[test]
    fn word_has_letter_ignores_case() {
        let word = Word::new("hello").unwrap();
        assert!(word.has_letter('h'));
        assert!(word.has_letter('L'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let counts = Word::new("hello").unwrap().letter_counts();
        assert_eq!(counts.get(&b'L'), Some(&2));
        assert_eq!(counts.get(&b'H'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
