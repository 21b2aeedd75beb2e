//! On-screen keyboard with per-key feedback colors
//!
//! The key set is fixed: 26 letters in three QWERTY rows plus one delete key.

use super::Tile;
use std::fmt;

const TOP_ROW: &str = "QWERTYUIOP";
const MID_ROW: &str = "ASDFGHJKL";
const BOTTOM_ROW: &str = "ZXCVBNM";

/// Width of a letter key
pub const KEY_WIDTH: u16 = 28;
/// Width of the delete key
pub const DELETE_KEY_WIDTH: u16 = 46;
/// Total number of keys: 26 letters plus delete
pub const KEY_COUNT: usize = 27;

/// A physical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Letter(char),
    Delete,
}

impl Key {
    /// Key for a letter, normalized to uppercase
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_uppercase()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Delete => write!(f, "[DEL]"),
        }
    }
}

/// Feedback color of a key
///
/// Ordered by priority: a key is never recolored to a lower variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KeyColor {
    #[default]
    Unset,
    /// Dark gray
    Miss,
    /// Yellow
    Misplaced,
    /// Green
    Hit,
}

impl KeyColor {
    /// Color for a scored tile; `None` for unscored tiles
    #[must_use]
    pub const fn for_tile(tile: Tile) -> Option<Self> {
        match tile {
            Tile::Hit(_) => Some(Self::Hit),
            Tile::Misplaced(_) => Some(Self::Misplaced),
            Tile::Miss(_) => Some(Self::Miss),
            Tile::Inactive | Tile::Active(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyTile {
    pub key: Key,
    pub color: KeyColor,
    pub width: u16,
}

impl KeyTile {
    #[must_use]
    pub const fn new(key: Key) -> Self {
        let width = match key {
            Key::Letter(_) => KEY_WIDTH,
            Key::Delete => DELETE_KEY_WIDTH,
        };
        Self {
            key,
            color: KeyColor::Unset,
            width,
        }
    }
}

/// The full keyboard, in three rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyTiles {
    rows: [Vec<KeyTile>; 3],
}

impl Default for KeyTiles {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTiles {
    #[must_use]
    pub fn new() -> Self {
        let letters = |row: &str| -> Vec<KeyTile> {
            row.chars().map(|c| KeyTile::new(Key::Letter(c))).collect()
        };
        let mut bottom = letters(BOTTOM_ROW);
        bottom.push(KeyTile::new(Key::Delete));

        Self {
            rows: [letters(TOP_ROW), letters(MID_ROW), bottom],
        }
    }

    #[must_use]
    pub const fn rows(&self) -> &[Vec<KeyTile>; 3] {
        &self.rows
    }

    #[must_use]
    pub fn top(&self) -> &[KeyTile] {
        &self.rows[0]
    }

    #[must_use]
    pub fn mid(&self) -> &[KeyTile] {
        &self.rows[1]
    }

    #[must_use]
    pub fn bottom(&self) -> &[KeyTile] {
        &self.rows[2]
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyTile> {
        self.rows.iter().flatten()
    }

    /// Current color of a letter's key
    #[must_use]
    pub fn color_of(&self, letter: char) -> Option<KeyColor> {
        let key = Key::letter(letter)?;
        self.iter().find(|tile| tile.key == key).map(|tile| tile.color)
    }

    /// Raise a letter key's color to `color` unless it already has a higher one
    ///
    /// Non-letters are ignored.
    pub fn promote(&mut self, letter: char, color: KeyColor) {
        let Some(key) = Key::letter(letter) else {
            return;
        };
        if let Some(tile) = self.rows.iter_mut().flatten().find(|tile| tile.key == key) {
            tile.color = tile.color.max(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keyboard_has_fixed_key_set() {
        let keys = KeyTiles::new();
        assert_eq!(keys.iter().count(), KEY_COUNT);

        let unique: HashSet<Key> = keys.iter().map(|tile| tile.key).collect();
        assert_eq!(unique.len(), KEY_COUNT);
        for c in 'A'..='Z' {
            assert!(unique.contains(&Key::Letter(c)), "missing {c}");
        }
        assert!(unique.contains(&Key::Delete));
    }

    #[test]
    fn keyboard_layout_is_qwerty() {
        let keys = KeyTiles::new();
        let row = |tiles: &[KeyTile]| tiles.iter().map(|t| t.key.to_string()).collect::<String>();
        assert_eq!(row(keys.top()), "QWERTYUIOP");
        assert_eq!(row(keys.mid()), "ASDFGHJKL");
        assert_eq!(row(keys.bottom()), "ZXCVBNM[DEL]");
    }

    #[test]
    fn delete_key_is_wider() {
        let keys = KeyTiles::new();
        let delete = keys.bottom().last().unwrap();
        assert_eq!(delete.key, Key::Delete);
        assert_eq!(delete.width, DELETE_KEY_WIDTH);
        assert!(keys.top().iter().all(|t| t.width == KEY_WIDTH));
    }

    #[test]
    fn new_keyboard_is_unset() {
        assert!(KeyTiles::new().iter().all(|t| t.color == KeyColor::Unset));
    }

    #[test]
    fn promote_never_downgrades() {
        let mut keys = KeyTiles::new();
        keys.promote('l', KeyColor::Hit);
        keys.promote('L', KeyColor::Misplaced);
        keys.promote('L', KeyColor::Miss);
        assert_eq!(keys.color_of('L'), Some(KeyColor::Hit));

        keys.promote('o', KeyColor::Miss);
        keys.promote('o', KeyColor::Misplaced);
        assert_eq!(keys.color_of('O'), Some(KeyColor::Misplaced));
    }

    #[test]
    fn promote_ignores_non_letters() {
        let mut keys = KeyTiles::new();
        keys.promote('1', KeyColor::Hit);
        assert_eq!(keys, KeyTiles::new());
    }

    #[test]
    fn key_letter_normalizes() {
        assert_eq!(Key::letter('q'), Some(Key::Letter('Q')));
        assert_eq!(Key::letter('-'), None);
    }
}
