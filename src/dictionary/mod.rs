//! Valid-word storage
//!
//! The dictionary answers "is this a word" and the pool supplies secret words.
//! Both are filled from one pass over a word list by [`WordRepository`].

mod pool;
mod repository;
mod trie;

pub use pool::WordPool;
pub use repository::WordRepository;
pub use trie::Trie;

/// Failures of loading and sampling words
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list could not be read
    #[error("Failed to read word list from {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The word list was read but held no valid five-letter word
    #[error("Word list {origin} contains no valid five-letter words")]
    EmptyWordList { origin: String },

    /// A drawn word cannot be used as a secret
    #[error("Word {word:?} cannot be a secret word: {source}")]
    InvalidEntry {
        word: String,
        #[source]
        source: crate::core::WordError,
    },

    /// Load requested on a repository that is already populated
    #[error("Requested init of an already initialised word repository")]
    AlreadyInitialised,

    /// Random word requested from an empty pool
    #[error("No elements: the word pool is empty")]
    NoElements,
}

/// Exact membership test over valid words
pub trait WordLookup {
    fn search(&self, word: &str) -> bool;
}

/// Source of uniformly random secret words
pub trait WordSampler {
    /// # Errors
    /// Returns `DictionaryError::NoElements` when there is nothing to draw from.
    fn random_word(&self) -> Result<String, DictionaryError>;
}

impl<T: WordLookup + ?Sized> WordLookup for &T {
    fn search(&self, word: &str) -> bool {
        (**self).search(word)
    }
}

impl<T: WordSampler + ?Sized> WordSampler for &T {
    fn random_word(&self) -> Result<String, DictionaryError> {
        (**self).random_word()
    }
}
