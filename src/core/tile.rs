//! Board tile representation
//!
//! A tile is one cell of the board: its status plus the letter it carries.

use std::fmt;

/// One cell of the board
///
/// Letters are always stored uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Empty, non-editable cell of a row that is not being played
    #[default]
    Inactive,
    /// Editable cell of the row currently being typed
    Active(Option<char>),
    /// Letter in the correct position
    Hit(char),
    /// Letter absent from the secret word
    Miss(char),
    /// Letter present in the secret word, wrong position
    Misplaced(char),
}

impl Tile {
    /// Active tile carrying a typed letter
    #[must_use]
    pub fn typed(letter: char) -> Self {
        Self::Active(Some(letter.to_ascii_uppercase()))
    }

    /// The letter on this tile, if any
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Inactive | Self::Active(None) => None,
            Self::Active(Some(c)) | Self::Hit(c) | Self::Miss(c) | Self::Misplaced(c) => Some(c),
        }
    }

    /// Displayable letter; empty when no letter is set
    #[must_use]
    pub fn display_letter(self) -> String {
        self.letter().map(String::from).unwrap_or_default()
    }

    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit(_))
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Whether the tile has been scored against the secret word
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        matches!(self, Self::Hit(_) | Self::Miss(_) | Self::Misplaced(_))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_letter())
    }
}
