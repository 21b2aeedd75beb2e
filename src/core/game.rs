//! One game in progress

use super::{Board, BoardRow, Guess, KeyTiles};

/// Everything needed to play one game: the board, the letters being typed, the
/// keyboard feedback and the secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub guess: Guess,
    pub key_tiles: KeyTiles,
    /// The answer, stored as a fully-Hit row
    pub secret: BoardRow,
    /// Set when the last full guess was not in the dictionary
    pub non_word_entered: bool,
    /// Set when the last full guess repeated the row above and was dropped
    pub repeated_guess: bool,
}

impl Game {
    /// Fresh game for a secret row
    #[must_use]
    pub fn new(secret: BoardRow) -> Self {
        Self {
            board: Board::new(),
            guess: Guess::new(),
            key_tiles: KeyTiles::new(),
            secret,
            non_word_entered: false,
            repeated_guess: false,
        }
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.board.is_ended()
    }

    #[must_use]
    pub fn is_guessed(&self) -> bool {
        self.board.is_guessed()
    }

    /// Make the Active row show the letters currently in the guess buffer
    pub fn sync_active_row(&mut self) {
        if let Some(index) = self.board.active_index() {
            self.board = self
                .board
                .with_row(index, BoardRow::active_from_letters(self.guess.letters()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    #[test]
    fn new_game_is_fresh() {
        let game = Game::new(BoardRow::hit_from_str("world").unwrap());
        assert_eq!(game.board, Board::new());
        assert!(game.guess.is_empty());
        assert_eq!(game.key_tiles, KeyTiles::new());
        assert!(!game.non_word_entered);
        assert!(!game.repeated_guess);
        assert!(!game.is_ended());
        assert_eq!(game.secret.word(), "WORLD");
    }

    #[test]
    fn sync_active_row_mirrors_guess() {
        let mut game = Game::new(BoardRow::hit_from_str("world").unwrap());
        game.guess = Guess::from("wo");
        game.sync_active_row();

        let row = game.board.rows()[0];
        assert_eq!(row.tiles()[0], Tile::Active(Some('W')));
        assert_eq!(row.tiles()[1], Tile::Active(Some('O')));
        assert_eq!(row.tiles()[2], Tile::Active(None));
        assert_eq!(game.board.active_index(), Some(0));
    }
}
