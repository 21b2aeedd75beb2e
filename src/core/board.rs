//! The game board: six rows of five tiles

use super::BoardRow;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Six ordered rows
///
/// A new board has row 0 empty and Active, rows 1-5 empty and Inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [BoardRow; MAX_ATTEMPTS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        let mut rows = [BoardRow::empty_inactive(); MAX_ATTEMPTS];
        rows[0] = BoardRow::empty_active();
        Self { rows }
    }

    #[must_use]
    pub const fn from_rows(rows: [BoardRow; MAX_ATTEMPTS]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub const fn rows(&self) -> &[BoardRow; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Copy of this board with one row replaced
    ///
    /// # Panics
    /// Panics if `index >= 6`
    #[must_use]
    pub fn with_row(mut self, index: usize, row: BoardRow) -> Self {
        self.rows[index] = row;
        self
    }

    /// Index of the row currently being typed
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.rows.iter().position(BoardRow::is_active)
    }

    /// No row is Active
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.active_index().is_none()
    }

    /// Some row is fully Hit
    #[must_use]
    pub fn is_guessed(&self) -> bool {
        self.rows.iter().any(BoardRow::is_guessed)
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.is_full() || self.is_guessed()
    }

    /// 1-based index of the row in which the secret was guessed
    ///
    /// `None` until some row is guessed.
    #[must_use]
    pub fn attempt_count(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(BoardRow::is_guessed)
            .map(|index| index + 1)
    }

    /// Rows that have been scored, in order
    pub fn evaluated_rows(&self) -> impl Iterator<Item = &BoardRow> {
        self.rows
            .iter()
            .filter(|row| row.tiles().iter().all(|t| t.is_evaluated()))
    }
}
