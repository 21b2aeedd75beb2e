//! Pure session transitions
//!
//! [`reduce`] consumes one state snapshot and an action and produces the next
//! snapshot. Actions that make no sense in the current state are ignored.

use super::{Action, GameState};
use crate::core::{BoardRow, Game, Key};
use crate::dictionary::{DictionaryError, WordLookup, WordSampler};
use crate::engine::{Outcome, advance};
use std::sync::Arc;

/// Next state after `action`
///
/// `words` is only consulted once the word list is loaded: to draw secrets on
/// `LoadSucceeded`/`NewGame` and to validate guesses on `SubmitIfFull`.
pub fn reduce<W>(state: GameState, action: Action, words: &W) -> GameState
where
    W: WordLookup + WordSampler + ?Sized,
{
    match (state, action) {
        (GameState::Init, Action::Start) => GameState::Loading,
        (GameState::Loading, Action::LoadSucceeded) => fresh_game(words),
        (GameState::Loading, Action::LoadFailed(cause)) => {
            tracing::warn!(%cause, "word list load failed");
            GameState::Error(cause)
        }
        (GameState::Error(_), Action::Retry) => GameState::Init,
        (GameState::InProgress(game), Action::Keypress(key)) => {
            GameState::InProgress(keypress(game, key))
        }
        (GameState::InProgress(game), Action::SubmitIfFull) => {
            GameState::InProgress(submit_if_full(game, words))
        }
        (GameState::InProgress(_), Action::NewGame) => fresh_game(words),
        (state, action) => {
            tracing::trace!(state = state.name(), ?action, "action ignored");
            state
        }
    }
}

/// New game with a random secret, or `Error` if no secret can be drawn
fn fresh_game<W: WordSampler + ?Sized>(words: &W) -> GameState {
    let secret = words.random_word().and_then(|word| {
        BoardRow::hit_from_str(&word).map_err(|source| DictionaryError::InvalidEntry { word, source })
    });

    match secret {
        Ok(secret) => {
            tracing::debug!("new game started");
            GameState::InProgress(Game::new(secret))
        }
        Err(err) => {
            tracing::warn!(%err, "cannot start a game");
            GameState::Error(Arc::new(err))
        }
    }
}

fn keypress(mut game: Game, key: Key) -> Game {
    if game.is_ended() {
        return game;
    }

    let changed = match key {
        Key::Delete => game.guess.pop().is_some(),
        Key::Letter(letter) => game.guess.push(letter),
    };

    if changed {
        game.non_word_entered = false;
        game.repeated_guess = false;
        game.sync_active_row();
    }
    game
}

fn submit_if_full<W: WordLookup + ?Sized>(game: Game, words: &W) -> Game {
    if game.is_ended() || !game.guess.is_full() {
        return game;
    }

    let (mut next, outcome) = advance(&game, words);
    tracing::debug!(?outcome, guess = %game.guess.as_string(), "guess submitted");

    next.repeated_guess = outcome == Outcome::Duplicate;
    if let Outcome::Committed { solved: true } = outcome {
        tracing::info!(attempts = ?next.board.attempt_count(), "secret word guessed");
    } else if next.board.is_ended() {
        tracing::info!(secret = %next.secret.word(), "out of attempts");
    }

    next.guess.clear();
    next.sync_active_row();
    next
}
