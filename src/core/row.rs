//! A single row of the board
//!
//! Rows are immutable values: every change produces a new row.

use super::{Tile, WORD_LENGTH, Word, WordError};

/// Exactly five tiles in fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardRow {
    tiles: [Tile; WORD_LENGTH],
}

impl BoardRow {
    #[must_use]
    pub const fn new(tiles: [Tile; WORD_LENGTH]) -> Self {
        Self { tiles }
    }

    /// The row being typed, with no letters yet
    #[must_use]
    pub const fn empty_active() -> Self {
        Self::new([Tile::Active(None); WORD_LENGTH])
    }

    /// A row that is not in play
    #[must_use]
    pub const fn empty_inactive() -> Self {
        Self::new([Tile::Inactive; WORD_LENGTH])
    }

    /// Fully-Hit row holding a word; this is how the secret word is stored
    #[must_use]
    pub fn hit(word: &Word) -> Self {
        Self::new(std::array::from_fn(|i| Tile::Hit(word.letter_at(i))))
    }

    /// Fully-Hit row from a string
    ///
    /// # Errors
    /// Returns `WordError` if the string is not exactly five ASCII letters.
    /// The input is never truncated or padded.
    ///
    /// # Examples
    /// ```
    /// use word_duel::core::BoardRow;
    ///
    /// let secret = BoardRow::hit_from_str("world").unwrap();
    /// assert!(secret.is_guessed());
    /// assert_eq!(secret.word(), "WORLD");
    ///
    /// assert!(BoardRow::hit_from_str("worlds").is_err());
    /// ```
    pub fn hit_from_str(text: &str) -> Result<Self, WordError> {
        Word::new(text).map(|word| Self::hit(&word))
    }

    /// Active row showing the letters typed so far
    ///
    /// Letters beyond the fifth are ignored; missing letters are empty Active tiles.
    #[must_use]
    pub fn active_from_letters(letters: &[char]) -> Self {
        Self::new(std::array::from_fn(|i| {
            letters.get(i).map_or(Tile::Active(None), |&c| Tile::typed(c))
        }))
    }

    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    /// All tiles are Hit
    #[must_use]
    pub fn is_guessed(&self) -> bool {
        self.tiles.iter().all(|t| t.is_hit())
    }

    /// All tiles are Active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.tiles.iter().all(|t| t.is_active())
    }

    #[must_use]
    pub fn is_inactive(&self) -> bool {
        self.tiles.iter().all(|t| *t == Tile::Inactive)
    }

    /// No tile carries a letter
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|t| t.letter().is_none())
    }

    /// Concatenated letters, uppercase
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles.iter().filter_map(|t| t.letter()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_active_row() {
        let row = BoardRow::empty_active();
        assert!(row.is_active());
        assert!(row.is_empty());
        assert!(!row.is_guessed());
        assert!(!row.is_inactive());
        assert_eq!(row.word(), "");
    }

    #[test]
    fn empty_inactive_row() {
        let row = BoardRow::empty_inactive();
        assert!(row.is_inactive());
        assert!(row.is_empty());
        assert!(!row.is_active());
    }

    #[test]
    fn hit_row_is_guessed() {
        let row = BoardRow::hit_from_str("world").unwrap();
        assert!(row.is_guessed());
        assert!(!row.is_empty());
        assert_eq!(row.word(), "WORLD");
        assert_eq!(row.tiles()[0], Tile::Hit('W'));
    }

    #[test]
    fn hit_from_str_rejects_wrong_length() {
        assert_eq!(
            BoardRow::hit_from_str("worlds"),
            Err(WordError::InvalidLength(6))
        );
        assert_eq!(BoardRow::hit_from_str("wor"), Err(WordError::InvalidLength(3)));
    }

    #[test]
    fn active_from_partial_letters() {
        let row = BoardRow::active_from_letters(&['h', 'e']);
        assert!(row.is_active());
        assert!(!row.is_empty());
        assert_eq!(row.word(), "HE");
        assert_eq!(row.tiles()[2], Tile::Active(None));
    }

    #[test]
    fn mixed_row_is_not_guessed() {
        let row = BoardRow::new([
            Tile::Hit('W'),
            Tile::Hit('O'),
            Tile::Misplaced('R'),
            Tile::Hit('L'),
            Tile::Hit('D'),
        ]);
        assert!(!row.is_guessed());
        assert!(!row.is_active());
        assert_eq!(row.word(), "WORLD");
    }
}
