//! The word repository: dictionary and pool, populated once from a word source

use super::{DictionaryError, Trie, WordLookup, WordPool, WordSampler};
use crate::wordlists::WordSource;
use crate::wordlists::loader::valid_words;
use std::sync::OnceLock;

#[derive(Debug)]
struct Lexicon {
    dictionary: Trie,
    pool: WordPool,
}

/// Dictionary and word pool built from the same pass over a word list
///
/// The repository starts empty and can be populated exactly once. After that it
/// is read-only and can be shared across threads.
#[derive(Debug, Default)]
pub struct WordRepository {
    lexicon: OnceLock<Lexicon>,
}

impl WordRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.lexicon.get().is_some()
    }

    /// Read the whole list from `source` and populate the repository
    ///
    /// A failed load leaves the repository empty, so it can be retried.
    ///
    /// # Errors
    /// - `AlreadyInitialised` if the repository was populated before
    /// - `Read` if the source cannot be read
    /// - `EmptyWordList` if the source holds no valid five-letter word
    pub fn init(&self, source: &dyn WordSource) -> Result<(), DictionaryError> {
        if self.is_loaded() {
            return Err(DictionaryError::AlreadyInitialised);
        }

        let origin = source.origin();
        tracing::info!(%origin, "loading word list");

        let lines = source.read_lines().map_err(|source| DictionaryError::Read {
            origin: origin.clone(),
            source,
        })?;

        let mut dictionary = Trie::new();
        let mut pool = WordPool::new();
        for word in valid_words(lines.iter().map(String::as_str)) {
            let text = word.text();
            dictionary.insert(&text);
            pool.push(text);
        }

        if pool.is_empty() {
            return Err(DictionaryError::EmptyWordList { origin });
        }

        tracing::info!(
            %origin,
            words = pool.len(),
            distinct = dictionary.len(),
            "word list loaded"
        );

        self.lexicon
            .set(Lexicon { dictionary, pool })
            .map_err(|_| DictionaryError::AlreadyInitialised)
    }

    /// Number of words in the pool; zero until loaded
    #[must_use]
    pub fn len(&self) -> usize {
        self.lexicon.get().map_or(0, |lexicon| lexicon.pool.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WordLookup for WordRepository {
    fn search(&self, word: &str) -> bool {
        self.lexicon
            .get()
            .is_some_and(|lexicon| lexicon.dictionary.search(word))
    }
}

impl WordSampler for WordRepository {
    fn random_word(&self) -> Result<String, DictionaryError> {
        self.lexicon
            .get()
            .ok_or(DictionaryError::NoElements)?
            .pool
            .random_word()
    }
}
