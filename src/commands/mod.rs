//! Command implementations

pub mod check;
pub mod score;
pub mod simple;

pub use check::check_word;
pub use score::score_guess;
pub use simple::{LineOutcome, apply_line, run_simple};

use crate::core::WordError;
use crate::dictionary::DictionaryError;
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Failure of a CLI command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("'{word}' is not a valid guess: {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error("could not load the word list: {0}")]
    LoadFailed(Arc<DictionaryError>),

    #[error("word list is still loading after {0} seconds")]
    LoadTimedOut(u64),

    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}

impl CommandError {
    pub(crate) fn invalid_word(word: &str, source: WordError) -> Self {
        Self::InvalidWord {
            word: word.to_string(),
            source,
        }
    }
}
