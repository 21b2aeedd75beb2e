//! Dictionary membership check

use super::CommandError;
use crate::core::Word;
use crate::dictionary::{WordLookup, WordRepository};
use crate::wordlists::WordSource;

/// Load the word list and report whether `word` is in it
///
/// # Errors
///
/// Returns an error if `word` is not five ASCII letters or the word list
/// cannot be loaded.
pub fn check_word(
    word: &str,
    repository: &WordRepository,
    source: &dyn WordSource,
) -> Result<bool, CommandError> {
    let word = Word::new(word).map_err(|err| CommandError::invalid_word(word, err))?;

    if !repository.is_loaded() {
        repository.init(source)?;
    }

    let found = repository.search(&word.text());
    tracing::debug!(word = %word, found, "checked word");
    Ok(found)
}
