//! Folding one submitted guess into the board

use super::evaluator::evaluate_guess;
use crate::core::{BoardRow, Game, MAX_ATTEMPTS};
use crate::dictionary::WordLookup;

/// What happened to a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not a word and the buffer is not full; nothing changed
    Incomplete,
    /// Full buffer that is not in the dictionary; the row was reset
    NonWord,
    /// Scored row equals the row above; nothing changed
    Duplicate,
    /// Row committed; `solved` when every tile was a Hit
    Committed { solved: bool },
}

/// Row the guess applies to: the Active row, or the last row once the board is full
fn target_row(game: &Game) -> usize {
    game.board.active_index().unwrap_or(MAX_ATTEMPTS - 1)
}

/// Fold the game's guess buffer into its board
///
/// Returns the next game and what happened. The secret word never changes.
/// A committed guess leaves the buffer as it was; clearing it is up to the caller.
#[must_use]
pub fn advance<L: WordLookup + ?Sized>(game: &Game, lookup: &L) -> (Game, Outcome) {
    let index = target_row(game);
    let word = game.guess.as_string();

    if !lookup.search(&word) {
        if !game.guess.is_full() {
            return (game.clone(), Outcome::Incomplete);
        }

        tracing::debug!(%word, row = index, "guess is not a word");
        let mut next = game.clone();
        next.board = next.board.with_row(index, BoardRow::empty_active());
        next.guess.clear();
        next.non_word_entered = true;
        return (next, Outcome::NonWord);
    }

    let Ok(evaluation) = evaluate_guess(&game.guess, &game.secret, &game.key_tiles) else {
        return (game.clone(), Outcome::Incomplete);
    };

    // Repeated delivery of the same submission must not advance twice
    if index > 0 && evaluation.row == game.board.rows()[index - 1] {
        tracing::debug!(%word, row = index, "guess repeats the previous row");
        return (game.clone(), Outcome::Duplicate);
    }

    let solved = evaluation.row.is_guessed();
    let mut board = game.board.with_row(index, evaluation.row);
    if !solved && index + 1 < MAX_ATTEMPTS {
        board = board.with_row(index + 1, BoardRow::empty_active());
    }

    tracing::debug!(%word, row = index, solved, "guess committed");
    let next = Game {
        board,
        guess: game.guess.clone(),
        key_tiles: evaluation.key_tiles,
        secret: game.secret,
        non_word_entered: false,
        repeated_guess: false,
    };
    (next, Outcome::Committed { solved })
}
