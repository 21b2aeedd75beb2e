//! Session state and the actions that drive it

use crate::core::{Game, Key};
use crate::dictionary::DictionaryError;
use std::sync::Arc;

/// Top-level state of a session
#[derive(Debug, Clone, Default)]
pub enum GameState {
    /// Nothing loaded yet
    #[default]
    Init,
    /// Word list load in flight
    Loading,
    /// Word list load failed; `retry` returns to `Init`
    Error(Arc<DictionaryError>),
    /// A game is being played (or has ended and awaits a new game)
    InProgress(Game),
}

impl GameState {
    #[must_use]
    pub const fn game(&self) -> Option<&Game> {
        match self {
            Self::InProgress(game) => Some(game),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Short name for logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init => "Init",
            Self::Loading => "Loading",
            Self::Error(_) => "Error",
            Self::InProgress(_) => "InProgress",
        }
    }
}

// Errors are compared by identity: two snapshots are equal only if they carry
// the same failure.
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Init, Self::Init) | (Self::Loading, Self::Loading) => true,
            (Self::Error(a), Self::Error(b)) => Arc::ptr_eq(a, b),
            (Self::InProgress(a), Self::InProgress(b)) => a == b,
            _ => false,
        }
    }
}

/// Everything that can happen to a session
#[derive(Debug, Clone)]
pub enum Action {
    Start,
    LoadSucceeded,
    LoadFailed(Arc<DictionaryError>),
    Retry,
    Keypress(Key),
    SubmitIfFull,
    NewGame,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardRow;

    #[test]
    fn default_state_is_init() {
        assert_eq!(GameState::default(), GameState::Init);
    }

    #[test]
    fn errors_compare_by_identity() {
        let cause = Arc::new(DictionaryError::NoElements);
        assert_eq!(
            GameState::Error(Arc::clone(&cause)),
            GameState::Error(Arc::clone(&cause))
        );
        assert_ne!(
            GameState::Error(cause),
            GameState::Error(Arc::new(DictionaryError::NoElements))
        );
    }

    #[test]
    fn game_only_in_progress() {
        let game = Game::new(BoardRow::hit_from_str("world").unwrap());
        assert!(GameState::InProgress(game).game().is_some());
        assert!(GameState::Loading.game().is_none());
        assert_eq!(GameState::Loading.name(), "Loading");
    }
}
