//! Prefix tree used to validate guesses

use super::WordLookup;
use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    is_word: bool,
}

/// Membership structure over words
///
/// Words are normalized to lowercase ASCII on insert and on search, so lookups
/// are case-insensitive. Search runs in time proportional to the word length.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word
    ///
    /// Returns `true` if the word was not present before. Inserting the same
    /// word again is a no-op. Empty strings are ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for byte in word.bytes() {
            node = node.children.entry(byte.to_ascii_lowercase()).or_default();
        }

        if node.is_word {
            false
        } else {
            node.is_word = true;
            self.len += 1;
            true
        }
    }

    /// Exact, case-insensitive membership test
    #[must_use]
    pub fn search(&self, word: &str) -> bool {
        let mut node = &self.root;
        for byte in word.bytes() {
            match node.children.get(&byte.to_ascii_lowercase()) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_word
    }

    /// Number of distinct words stored
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True until the first successful insert
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl WordLookup for Trie {
    fn search(&self, word: &str) -> bool {
        Self::search(self, word)
    }
}
