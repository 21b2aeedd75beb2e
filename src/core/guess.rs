//! The guess buffer: letters typed but not yet submitted

use super::{WORD_LENGTH, Word, WordError};

/// Ordered sequence of 0-5 uppercase letters
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Guess {
    letters: Vec<char>,
}

impl Guess {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter
    ///
    /// Returns `false` (and leaves the buffer untouched) when the buffer is full
    /// or `letter` is not an ASCII letter.
    pub fn push(&mut self, letter: char) -> bool {
        if self.is_full() || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.letters.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == WORD_LENGTH
    }

    #[must_use]
    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }

    /// The buffer as a word
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` unless the buffer is full.
    pub fn to_word(&self) -> Result<Word, WordError> {
        Word::new(self.as_string())
    }
}

impl From<&str> for Guess {
    fn from(text: &str) -> Self {
        let mut guess = Self::new();
        for c in text.chars() {
            guess.push(c);
        }
        guess
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_until_full() {
        let mut guess = Guess::new();
        for c in "world".chars() {
            assert!(guess.push(c));
        }
        assert!(guess.is_full());
        assert!(!guess.push('s'));
        assert_eq!(guess.as_string(), "WORLD");
    }

    #[test]
    fn push_rejects_non_letters() {
        let mut guess = Guess::new();
        assert!(!guess.push('1'));
        assert!(!guess.push(' '));
        assert!(guess.is_empty());
    }

    #[test]
    fn pop_removes_last() {
        let mut guess = Guess::from("ab");
        assert_eq!(guess.pop(), Some('B'));
        assert_eq!(guess.letters(), &['A']);
        assert_eq!(guess.pop(), Some('A'));
        assert_eq!(guess.pop(), None);
    }

    #[test]
    fn to_word_requires_full_buffer() {
        assert_eq!(
            Guess::from("wor").to_word(),
            Err(WordError::InvalidLength(3))
        );
        assert_eq!(Guess::from("world").to_word().unwrap().text(), "WORLD");
    }

    #[test]
    fn from_str_truncates_at_five() {
        let guess = Guess::from("worlds");
        assert_eq!(guess.len(), 5);
        assert_eq!(guess.as_string(), "WORLD");
    }
}
