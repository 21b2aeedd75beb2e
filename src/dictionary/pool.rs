//! Ordered list of every loaded word, used to draw secret words

use super::{DictionaryError, WordSampler};
use rand::Rng;
use rand::seq::IndexedRandom;

/// All loaded words in load order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Uniformly random word drawn with the given generator
    ///
    /// # Errors
    /// Returns `DictionaryError::NoElements` if the pool is empty.
    pub fn random_word_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, DictionaryError> {
        self.words
            .choose(rng)
            .cloned()
            .ok_or(DictionaryError::NoElements)
    }
}

impl WordSampler for WordPool {
    fn random_word(&self) -> Result<String, DictionaryError> {
        self.random_word_with(&mut rand::rng())
    }
}

impl FromIterator<String> for WordPool {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
