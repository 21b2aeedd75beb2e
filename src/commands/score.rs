//! Score one guess against a chosen secret

use super::CommandError;
use crate::core::{BoardRow, Word};
use crate::engine::score;

/// Score `guess` against `secret` without any dictionary check
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_guess(secret: &str, guess: &str) -> Result<BoardRow, CommandError> {
    let answer = Word::new(secret).map_err(|err| CommandError::invalid_word(secret, err))?;
    let guess_word = Word::new(guess).map_err(|err| CommandError::invalid_word(guess, err))?;
    Ok(BoardRow::new(score(&guess_word, &answer)))
}
